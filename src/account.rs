use parking_lot::Mutex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::policy;

pub type AccountId = String;

/// Fixed ceiling for a single deposit, withdrawal or transfer.
pub const MAX_TRANSACTION_AMOUNT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{field} can't be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be greater or equal to zero, got {amount}")]
    NegativeAmount { field: &'static str, amount: Decimal },
    #[error("amount {amount} exceeds the transaction limit of {limit}")]
    ExceedsLimit { amount: Decimal, limit: Decimal },
    #[error("insufficient funds: balance would drop to {available}, below the minimum of {floor}")]
    InsufficientFunds { available: Decimal, floor: Decimal },
    #[error("account {id} can't transfer to itself")]
    SelfTransfer { id: AccountId },
}

/// An account record with a lock-guarded balance.
///
/// `id`, `owner` and `min_balance` are fixed at construction; `balance` is
/// only ever read or written while the account's own lock is held, so all
/// operations take `&self` and a shared [`std::sync::Arc<Account>`] handle
/// can be used from many threads at once.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    owner: String,
    min_balance: Decimal,
    balance: Mutex<Decimal>,
}

impl Account {
    /// Creates an account holding `initial_balance`.
    ///
    /// Fails if `id` or `owner` is empty, if either amount is negative, or
    /// if `initial_balance` starts out below `min_balance`. A failed
    /// construction yields no account.
    pub fn new(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        initial_balance: Decimal,
        min_balance: Decimal,
    ) -> Result<Self, AccountError> {
        let id = id.into();
        let owner = owner.into();
        policy::require_non_empty("id", &id)?;
        policy::require_non_empty("owner", &owner)?;
        policy::require_non_negative("initial balance", initial_balance)?;
        policy::require_non_negative("minimal balance", min_balance)?;
        policy::check_floor(initial_balance, min_balance)?;
        Ok(Self {
            id,
            owner,
            min_balance,
            balance: Mutex::new(initial_balance),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn min_balance(&self) -> Decimal {
        self.min_balance
    }

    /// Current balance. Takes the lock for the duration of the read, so the
    /// returned value is some balance the account actually held.
    pub fn balance(&self) -> Decimal {
        *self.balance.lock()
    }

    /// Adds `amount` to the balance.
    ///
    /// A deposit can only raise the balance, so there is no floor check;
    /// the amount itself is validated before the lock is taken.
    pub fn deposit(&self, amount: Decimal) -> Result<(), AccountError> {
        policy::check_transaction_amount(amount)?;
        *self.balance.lock() += amount;
        Ok(())
    }

    /// Subtracts `amount` from the balance.
    ///
    /// The floor check and the mutation happen under one lock acquisition;
    /// checking first and locking later would let a concurrent withdrawal
    /// slip between the two and drive the balance below `min_balance`.
    pub fn withdraw(&self, amount: Decimal) -> Result<(), AccountError> {
        policy::check_transaction_amount(amount)?;
        let mut balance = self.balance.lock();
        policy::check_floor(*balance - amount, self.min_balance)?;
        *balance -= amount;
        Ok(())
    }

    /// Moves `amount` from this account to `target`.
    ///
    /// Both locks are held across the floor check and both mutations, so no
    /// observer sees the debit without the credit. Locks are acquired in
    /// identifier order rather than source-first: two threads running
    /// opposing transfers between the same pair would otherwise each grab
    /// their own source lock and wait on the other forever.
    pub fn transfer(&self, amount: Decimal, target: &Account) -> Result<(), AccountError> {
        if std::ptr::eq(self, target) || self.id == target.id {
            return Err(AccountError::SelfTransfer {
                id: self.id.clone(),
            });
        }
        policy::check_transaction_amount(amount)?;

        let (mut source_balance, mut target_balance);
        if self.id < target.id {
            source_balance = self.balance.lock();
            target_balance = target.balance.lock();
        } else {
            target_balance = target.balance.lock();
            source_balance = self.balance.lock();
        }
        policy::check_floor(*source_balance - amount, self.min_balance)?;
        *source_balance -= amount;
        *target_balance += amount;
        Ok(())
    }
}
