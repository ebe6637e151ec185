use std::marker::PhantomData;
use tracing::{debug, warn};

use super::error::EngineError;
use crate::domain::{Account, AmountType, Instruction};
use crate::storage::AccountStore;

/// Ledger processor applying instructions to an account store
pub struct LedgerProcessor<A, S>
where
    A: AmountType,
    S: AccountStore<A>,
{
    store: S,
    _phantom: PhantomData<A>,
}

impl<A, S> LedgerProcessor<A, S>
where
    A: AmountType,
    S: AccountStore<A>,
{
    /// Create a new ledger processor
    pub fn new(store: S) -> Self {
        Self {
            store,
            _phantom: PhantomData,
        }
    }

    /// Process a single instruction
    pub fn process(&mut self, instruction: Instruction<A>) -> Result<(), EngineError> {
        match instruction {
            Instruction::Open { owner, balance } => self.process_open(owner, balance),
            Instruction::Credit { owner, amount } => self.process_credit(&owner, amount),
            Instruction::Debit { owner, amount } => self.process_debit(&owner, amount),
            Instruction::Transfer { from, to, amount } => {
                self.process_transfer(&from, &to, amount)
            }
        }
    }

    /// Get reference to the store for snapshot operations
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the processor and return the store
    pub fn into_store(self) -> S {
        self.store
    }

    fn process_open(&mut self, owner: String, balance: A) -> Result<(), EngineError> {
        debug!(owner = %owner, %balance, "Processing open");

        if self.store.contains(&owner) {
            warn!(owner = %owner, "Account already open");
            return Err(EngineError::DuplicateOwner(owner));
        }

        self.store.open(Account::new(owner, balance))?;
        Ok(())
    }

    fn process_credit(&mut self, owner: &str, amount: A) -> Result<(), EngineError> {
        debug!(owner, %amount, "Processing credit");

        self.store
            .try_update(owner, |account| account.credit(amount))?;
        Ok(())
    }

    fn process_debit(&mut self, owner: &str, amount: A) -> Result<(), EngineError> {
        debug!(owner, %amount, "Processing debit");

        self.store
            .try_update(owner, |account| account.debit(amount))?;
        Ok(())
    }

    fn process_transfer(&mut self, from: &str, to: &str, amount: A) -> Result<(), EngineError> {
        debug!(from, to, %amount, "Processing transfer");

        self.store.transfer(from, to, amount)?;
        Ok(())
    }
}
