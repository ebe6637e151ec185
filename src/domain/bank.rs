use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::account::Account;
use super::amount::{Amount, AmountType};
use super::error::DomainError;
use super::operations::{apply_self_transfer, apply_transfer};

static NEXT_BANK_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique bank handle, used as the account back-reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BankId(u64);

impl BankId {
    pub(crate) fn next() -> Self {
        Self(NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Position of an account inside a bank's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(usize);

impl AccountId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Bank owning an insertion-ordered collection of accounts
#[derive(Debug, Clone)]
pub struct Bank<A: AmountType = Amount> {
    id: BankId,
    name: String,
    accounts: Vec<Account<A>>,
}

impl<A: AmountType> Bank<A> {
    /// Create an unnamed bank with no accounts
    pub fn new() -> Self {
        Self::with_name("")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: BankId::next(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Register an account: append it and point its back-reference here.
    /// Duplicates are kept.
    pub fn add_account(&mut self, mut account: Account<A>) -> AccountId {
        account.set_bank(self.id);
        debug!(
            bank = %self.name,
            owner = account.owner().unwrap_or_default(),
            "Registered account"
        );

        self.accounts.push(account);
        AccountId(self.accounts.len() - 1)
    }

    /// All accounts in registration order
    pub fn accounts(&self) -> &[Account<A>] {
        &self.accounts
    }

    /// Replace the whole collection. Back-references are left as they are.
    pub fn set_accounts(&mut self, accounts: Vec<Account<A>>) {
        self.accounts = accounts;
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account<A>> {
        self.accounts.get(id.0)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account<A>> {
        self.accounts.get_mut(id.0)
    }

    /// First account registered for `owner`
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account<A>> {
        self.accounts.iter().find(|a| a.owner() == Some(owner))
    }

    pub fn position_of(&self, owner: &str) -> Option<AccountId> {
        self.accounts
            .iter()
            .position(|a| a.owner() == Some(owner))
            .map(AccountId)
    }

    pub fn contains_owner(&self, owner: &str) -> bool {
        self.position_of(owner).is_some()
    }

    /// Whether `account`'s back-reference points at this bank
    pub fn is_home_of(&self, account: &Account<A>) -> bool {
        account.bank() == Some(self.id)
    }

    /// Debit `source`, then credit `destination`.
    ///
    /// Neither account has to be registered with this bank. A failed debit
    /// leaves both untouched and its error is returned unchanged.
    pub fn transfer(
        &self,
        source: &mut Account<A>,
        destination: &mut Account<A>,
        amount: A,
    ) -> Result<(), DomainError> {
        debug!(
            bank = %self.name,
            from = source.owner().unwrap_or_default(),
            to = destination.owner().unwrap_or_default(),
            %amount,
            "Transfer"
        );
        apply_transfer(source, destination, amount)
    }

    /// Transfer between two accounts held by this bank
    pub fn transfer_between(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: A,
    ) -> Result<(), DomainError> {
        for id in [from, to] {
            if id.0 >= self.accounts.len() {
                return Err(DomainError::AccountNotFound(id.0));
            }
        }

        if from == to {
            return apply_self_transfer(&mut self.accounts[from.0], amount);
        }

        let (source, destination) = pair_mut(&mut self.accounts, from.0, to.0);
        apply_transfer(source, destination, amount)
    }
}

impl<A: AmountType> Default for Bank<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two distinct mutable elements of a slice; `a != b`, both in bounds
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
