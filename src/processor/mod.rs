use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, AccountId},
    command::{CommandError, CommandKind},
};

pub mod in_memory_ledger;

#[derive(Debug, Error)]
pub enum CommandProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error("No account with id {id}")]
    UnknownAccount { id: AccountId },
    #[error("Account with id {id} already exists")]
    DuplicateAccount { id: AccountId },
}

pub trait CommandProcessor {
    fn process_command(
        &mut self,
        kind: CommandKind,
        account: AccountId,
        owner: Option<String>,
        target: Option<AccountId>,
        amount: Option<Decimal>,
        min_balance: Option<Decimal>,
    ) -> Result<(), CommandProcessError>;
}
