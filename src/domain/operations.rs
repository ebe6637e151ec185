use super::account::Account;
use super::amount::AmountType;
use super::error::DomainError;

/// Move `amount` from `source` to `destination`.
///
/// Debits first so the destination is never credited for money the source
/// could not cover. If the credit fails afterwards, the source balance is put back.
pub fn apply_transfer<A: AmountType>(
    source: &mut Account<A>,
    destination: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    let previous = source.balance();

    source.debit(amount)?;

    if let Err(e) = destination.credit(amount) {
        if let Some(balance) = previous {
            source.set_balance(balance);
        }
        return Err(e);
    }

    Ok(())
}

/// Debit then credit the same account; fails like a debit would.
pub fn apply_self_transfer<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
) -> Result<(), DomainError> {
    let previous = account.balance();

    account.debit(amount)?;

    if let Err(e) = account.credit(amount) {
        if let Some(balance) = previous {
            account.set_balance(balance);
        }
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;

    fn amount(s: &str) -> Amount {
        Amount::from_decimal_str(s).unwrap()
    }

    #[test]
    fn transfer_moves_amount_between_accounts() {
        let mut graciela = Account::new("Graciela", amount("2500"));
        let mut cecilia = Account::new("Cecilia", amount("1250"));

        apply_transfer(&mut graciela, &mut cecilia, amount("925")).unwrap();

        assert_eq!(graciela.balance().unwrap().to_decimal_string(), "1575");
        assert_eq!(cecilia.balance().unwrap().to_decimal_string(), "2175");
    }

    #[test]
    fn transfer_preserves_total() {
        let mut source = Account::new("a", amount("2500"));
        let mut destination = Account::new("b", amount("1250"));
        let before = source.balance().unwrap() + destination.balance().unwrap();

        apply_transfer(&mut source, &mut destination, amount("925")).unwrap();

        let after = source.balance().unwrap() + destination.balance().unwrap();
        assert_eq!(before, after);
        assert_eq!(after.to_decimal_string(), "3750");
    }

    #[test]
    fn failed_debit_leaves_both_sides_untouched() {
        let mut source = Account::new("a", amount("100"));
        let mut destination = Account::new("b", amount("50"));

        let err = apply_transfer(&mut source, &mut destination, amount("100.01")).unwrap_err();

        assert_eq!(err, DomainError::InsufficientFunds);
        assert_eq!(source.balance(), Some(amount("100")));
        assert_eq!(destination.balance(), Some(amount("50")));
    }

    #[test]
    fn failed_credit_restores_source() {
        let mut source = Account::new("a", amount("100"));
        let mut destination: Account = Account::default();

        let err = apply_transfer(&mut source, &mut destination, amount("40")).unwrap_err();

        assert_eq!(err, DomainError::BalanceUnset);
        assert_eq!(source.balance(), Some(amount("100")));
        assert_eq!(destination.balance(), None);
    }

    #[test]
    fn self_transfer_is_net_noop() {
        let mut account = Account::new("a", amount("10"));

        apply_self_transfer(&mut account, amount("10")).unwrap();
        assert_eq!(account.balance(), Some(amount("10")));

        assert_eq!(
            apply_self_transfer(&mut account, amount("11")),
            Err(DomainError::InsufficientFunds)
        );
        assert_eq!(account.balance(), Some(amount("10")));
    }
}
