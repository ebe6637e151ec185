use std::path::PathBuf;

use super::error::AppError;
use crate::streaming::{AbortOnError, ErrorPolicy, SkipErrors};

pub const USAGE: &str = "Usage: bank <instructions.csv> [--strict] [--bank-name NAME]";

/// Bank name used when none is given on the command line
pub const DEFAULT_BANK_NAME: &str = "bank";

/// Command-line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub strict: bool,
    pub bank_name: String,
}

impl CliConfig {
    /// Parse and validate command-line arguments (including the program name)
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().skip(1);
        let mut input = None;
        let mut strict = false;
        let mut bank_name = DEFAULT_BANK_NAME.to_string();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strict" => strict = true,
                "--bank-name" => {
                    bank_name = args.next().ok_or_else(usage_error)?;
                }
                flag if flag.starts_with("--") => return Err(usage_error()),
                _ if input.is_some() => return Err(usage_error()),
                path => input = Some(PathBuf::from(path)),
            }
        }

        Ok(Self {
            input: input.ok_or_else(usage_error)?,
            strict,
            bank_name,
        })
    }

    /// Error policy selected by `--strict`
    pub fn error_policy(&self) -> Box<dyn ErrorPolicy> {
        if self.strict {
            Box::new(AbortOnError)
        } else {
            Box::new(SkipErrors)
        }
    }
}

fn usage_error() -> AppError {
    AppError::InvalidArguments(USAGE.to_string())
}
