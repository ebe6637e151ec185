use std::fmt::Write;

use bank::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use futures::io::Cursor;
use tokio::runtime::Runtime;

fn amount(s: &str) -> Amount {
    Amount::from_decimal_str(s).unwrap()
}

/// Bank with `num_accounts` accounts named "0", "1", ... each holding 1000.00
fn seeded_bank(num_accounts: usize) -> (Bank, Vec<AccountId>) {
    let mut bank = Bank::with_name("bench");
    let ids = (0..num_accounts)
        .map(|i| bank.add_account(Account::new(i.to_string(), amount("1000.00"))))
        .collect();
    (bank, ids)
}

/// Round-robin transfers of small amounts between accounts
fn generate_csv(num_accounts: usize, num_transfers: usize) -> Vec<u8> {
    let mut csv = String::from("type,owner,counterparty,amount\n");
    for i in 0..num_accounts {
        writeln!(csv, "open,{i},,1000.00").unwrap();
    }
    for i in 0..num_transfers {
        let from = i % num_accounts;
        let to = (i * 7 + 1) % num_accounts;
        writeln!(csv, "transfer,{from},{to},0.{:02}", i % 100).unwrap();
    }
    csv.into_bytes()
}

/// Benchmark debit/credit pairs on a single account
fn bench_account_debit_credit(c: &mut Criterion) {
    c.bench_function("account_debit_credit", |b| {
        let mut account = Account::new("Andres", amount("1000.12345"));
        let value = amount("100.5");
        b.iter(|| {
            account.debit(black_box(value)).unwrap();
            account.credit(black_box(value)).unwrap();
        });
    });
}

/// Benchmark transfers between accounts held by a bank
fn bench_bank_transfer_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_transfer_between");

    for num_accounts in [2, 100, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_accounts),
            &num_accounts,
            |b, &num_accounts| {
                b.iter_batched(
                    || seeded_bank(num_accounts),
                    |(mut bank, ids)| {
                        for i in 0..1_000 {
                            let from = ids[i % ids.len()];
                            let to = ids[(i + 1) % ids.len()];
                            black_box(bank.transfer_between(from, to, amount("0.01")).is_ok());
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark transfers on the concurrent bank
fn bench_concurrent_transfer(c: &mut Criterion) {
    c.bench_function("concurrent_bank_transfer", |b| {
        b.iter_batched(
            || {
                let bank = ConcurrentBank::new("bench");
                for i in 0..100 {
                    bank.open_account(Account::new(i.to_string(), amount("1000.00")))
                        .unwrap();
                }
                bank
            },
            |bank| {
                for i in 0..1_000usize {
                    let from = (i % 100).to_string();
                    let to = ((i + 1) % 100).to_string();
                    black_box(bank.transfer_between(&from, &to, amount("0.01")).is_ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark the complete CSV pipeline
fn bench_csv_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_pipeline");
    let runtime = Runtime::new().unwrap();

    for (size_name, num_accounts, num_transfers) in
        [("small_1k", 100, 1_000), ("medium_10k", 1_000, 10_000)]
    {
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &(num_accounts, num_transfers),
            |b, &(num_accounts, num_transfers)| {
                b.to_async(&runtime).iter_batched(
                    || generate_csv(num_accounts, num_transfers),
                    |csv_data| async move {
                        let stream = CsvInstructionStream::<Amount>::new(Cursor::new(csv_data));
                        let processor = LedgerProcessor::new(Bank::with_name("bench"));
                        let mut session = ProcessingSession::new(processor, SilentSkip);
                        black_box(session.process_stream(stream).await);

                        let mut output = Vec::new();
                        write_snapshot(session.store(), &mut output).await.unwrap();
                        black_box(output);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_account_debit_credit,
    bench_bank_transfer_between,
    bench_concurrent_transfer,
    bench_csv_pipeline,
);

criterion_main!(benches);
