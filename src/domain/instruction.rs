use super::amount::AmountType;

/// Ledger instructions with separate variants for type safety
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<A: AmountType> {
    Open {
        owner: String,
        balance: A,
    },
    Credit {
        owner: String,
        amount: A,
    },
    Debit {
        owner: String,
        amount: A,
    },
    Transfer {
        from: String,
        to: String,
        amount: A,
    },
}

impl<A: AmountType> Instruction<A> {
    /// Owner the instruction acts on (the source for transfers)
    pub fn owner(&self) -> &str {
        match self {
            Self::Open { owner, .. } => owner,
            Self::Credit { owner, .. } => owner,
            Self::Debit { owner, .. } => owner,
            Self::Transfer { from, .. } => from,
        }
    }

    /// Short lowercase name, as used in CSV input
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Credit { .. } => "credit",
            Self::Debit { .. } => "debit",
            Self::Transfer { .. } => "transfer",
        }
    }
}
