use tokio::io::AsyncWrite;
use tracing::info;

use super::config::CliConfig;
use super::error::AppError;
use crate::domain::{Amount, Bank};
use crate::engine::LedgerProcessor;
use crate::io::{CsvInstructionStream, write_snapshot};
use crate::streaming::ProcessingSession;

/// Apply the configured instruction file to a fresh bank and write its snapshot.
///
/// Nothing is written when the error policy aborts processing.
pub async fn run_ledger<W>(config: CliConfig, mut writer: W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin + Send,
{
    let stream = CsvInstructionStream::<Amount>::from_file(&config.input).await?;

    let processor = LedgerProcessor::new(Bank::with_name(config.bank_name.as_str()));
    let mut session = ProcessingSession::new(processor, config.error_policy());

    if !session.process_stream(stream).await {
        return Err(AppError::Aborted(config.input.display().to_string()));
    }

    write_snapshot(session.store(), &mut writer).await?;
    info!(
        bank = %config.bank_name,
        accounts = session.store().len(),
        "Snapshot written"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn input_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config(path: PathBuf, strict: bool) -> CliConfig {
        CliConfig {
            input: path,
            strict,
            bank_name: "Banco Credicoop".to_string(),
        }
    }

    #[tokio::test]
    async fn processes_file_and_writes_snapshot() {
        let file = input_file(
            "type,owner,counterparty,amount\n\
             open,Graciela,,2500\n\
             open,Cecilia,,1250\n\
             transfer,Graciela,Cecilia,925\n",
        );
        let mut output = Vec::new();

        run_ledger(config(file.path().to_path_buf(), false), &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "owner,balance\nGraciela,1575\nCecilia,2175\n"
        );
    }

    #[tokio::test]
    async fn strict_mode_aborts_without_snapshot() {
        let file = input_file(
            "type,owner,counterparty,amount\n\
             open,Cecilia,,1000.12345\n\
             debit,Cecilia,,1500\n",
        );
        let mut output = Vec::new();

        let err = run_ledger(config(file.path().to_path_buf(), true), &mut output)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Aborted(_)));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let mut output = Vec::new();

        let err = run_ledger(config(PathBuf::from("/nonexistent/input.csv"), false), &mut output)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CsvIo(_)));
    }
}
