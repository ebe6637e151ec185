use serde::Deserialize;

use super::error::IoError;
use crate::domain::{AmountType, Instruction};

/// Raw CSV record as read from input
#[derive(Debug, Deserialize)]
pub struct RawInstructionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub owner: Option<String>,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
}

impl RawInstructionRecord {
    /// Parse this raw record into a strongly-typed Instruction
    pub fn parse<A: AmountType>(self) -> Result<Instruction<A>, IoError> {
        let kind = self.kind.trim().to_lowercase();

        match kind.as_str() {
            "open" => Ok(Instruction::Open {
                owner: required(self.owner, "owner required for open")?,
                balance: parse_amount(self.amount, "amount required for open")?,
            }),
            "credit" => Ok(Instruction::Credit {
                owner: required(self.owner, "owner required for credit")?,
                amount: parse_amount(self.amount, "amount required for credit")?,
            }),
            "debit" => Ok(Instruction::Debit {
                owner: required(self.owner, "owner required for debit")?,
                amount: parse_amount(self.amount, "amount required for debit")?,
            }),
            "transfer" => Ok(Instruction::Transfer {
                from: required(self.owner, "owner required for transfer")?,
                to: required(self.counterparty, "counterparty required for transfer")?,
                amount: parse_amount(self.amount, "amount required for transfer")?,
            }),
            _ => Err(IoError::InvalidInstructionType(self.kind)),
        }
    }
}

fn required(field: Option<String>, message: &str) -> Result<String, IoError> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IoError::MissingField(message.to_string()))
}

fn parse_amount<A: AmountType>(field: Option<String>, message: &str) -> Result<A, IoError> {
    let raw = required(field, message)?;
    A::from_decimal_str(&raw).map_err(|_| IoError::InvalidAmount(raw))
}
