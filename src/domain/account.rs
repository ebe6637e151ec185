use super::amount::{Amount, AmountType};
use super::bank::BankId;
use super::error::DomainError;

/// Account holding an owner and an exact balance.
///
/// Both fields may be unset (see [`Account::default`]). The `bank` handle is a
/// lookup-only back-reference written by [`Bank::add_account`](super::Bank::add_account).
#[derive(Debug, Clone)]
pub struct Account<A: AmountType = Amount> {
    owner: Option<String>,
    balance: Option<A>,
    bank: Option<BankId>,
}

impl<A: AmountType> Account<A> {
    /// Create an account with an owner and an opening balance
    pub fn new(owner: impl Into<String>, balance: A) -> Self {
        Self {
            owner: Some(owner.into()),
            balance: Some(balance),
            bank: None,
        }
    }

    /// Get the owner, if set
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = Some(owner.into());
    }

    /// Get the balance, if set
    pub fn balance(&self) -> Option<A> {
        self.balance
    }

    pub fn set_balance(&mut self, balance: A) {
        self.balance = Some(balance);
    }

    /// Bank this account was last registered with
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn set_bank(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Owner, balance and balance scale, when both fields are set.
    ///
    /// Equality is defined over this key, so `999` and `999.00` are different
    /// balances even though they compare equal as amounts.
    pub fn key(&self) -> Option<(&str, A, u32)> {
        let balance = self.balance?;
        Some((self.owner.as_deref()?, balance, balance.scale()))
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with [`DomainError::InsufficientFunds`] when the result would be
    /// negative; the balance is only written once the new value is known to be valid.
    pub fn debit(&mut self, amount: A) -> Result<(), DomainError> {
        let balance = self.balance.ok_or(DomainError::BalanceUnset)?;
        let new_balance = balance
            .checked_sub(amount)
            .ok_or(DomainError::Overflow)?;

        if new_balance.is_negative() {
            return Err(DomainError::InsufficientFunds);
        }

        self.balance = Some(new_balance);
        Ok(())
    }

    /// Add `amount` to the balance. No upper bound beyond the decimal range.
    pub fn credit(&mut self, amount: A) -> Result<(), DomainError> {
        let balance = self.balance.ok_or(DomainError::BalanceUnset)?;
        let new_balance = balance
            .checked_add(amount)
            .ok_or(DomainError::Overflow)?;

        self.balance = Some(new_balance);
        Ok(())
    }
}

impl<A: AmountType> Default for Account<A> {
    fn default() -> Self {
        Self {
            owner: None,
            balance: None,
            bank: None,
        }
    }
}

// Not `Eq`: an account with an unset field is not even equal to itself.
impl<A: AmountType> PartialEq for Account<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self.key(), other.key()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}
