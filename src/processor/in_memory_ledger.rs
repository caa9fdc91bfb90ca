use std::{collections::HashMap, sync::Arc};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    account::{Account, AccountId},
    command::{CommandKind, LedgerCommand},
};

use super::{CommandProcessError, CommandProcessor};

/// Ledger keeping every account in a process-local map.
///
/// Accounts are handed out as [`Arc`] handles, so callers may keep a handle
/// and run deposits, withdrawals and transfers on it from other threads
/// while the ledger keeps processing commands.
#[derive(Default)]
pub struct InMemoryLedger {
    pub accounts: HashMap<AccountId, Arc<Account>>,
}

impl InMemoryLedger {
    pub fn account(&self, id: &str) -> Result<&Arc<Account>, CommandProcessError> {
        self.accounts
            .get(id)
            .ok_or_else(|| CommandProcessError::UnknownAccount { id: id.to_owned() })
    }

    fn open(
        &mut self,
        id: AccountId,
        owner: String,
        initial_balance: Decimal,
        min_balance: Decimal,
    ) -> Result<(), CommandProcessError> {
        if self.accounts.contains_key(&id) {
            return Err(CommandProcessError::DuplicateAccount { id });
        }
        let account = Account::new(id, owner, initial_balance, min_balance)?;
        debug!(id = account.id(), owner = account.owner(), "account opened");
        self.accounts
            .insert(account.id().to_owned(), Arc::new(account));
        Ok(())
    }

    fn apply(&mut self, command: LedgerCommand) -> Result<(), CommandProcessError> {
        match command {
            LedgerCommand::Open {
                id,
                owner,
                initial_balance,
                min_balance,
            } => self.open(id, owner, initial_balance, min_balance),
            LedgerCommand::Deposit { id, amount } => Ok(self.account(&id)?.deposit(amount)?),
            LedgerCommand::Withdraw { id, amount } => Ok(self.account(&id)?.withdraw(amount)?),
            LedgerCommand::Transfer { id, target, amount } => {
                let source = self.account(&id)?;
                let target = self.account(&target)?;
                Ok(source.transfer(amount, target)?)
            }
        }
    }
}

impl CommandProcessor for InMemoryLedger {
    fn process_command(
        &mut self,
        kind: CommandKind,
        account: AccountId,
        owner: Option<String>,
        target: Option<AccountId>,
        amount: Option<Decimal>,
        min_balance: Option<Decimal>,
    ) -> Result<(), CommandProcessError> {
        let command = LedgerCommand::parse(kind, account, owner, target, amount, min_balance)?;
        let result = self.apply(command);
        if let Err(err) = &result {
            warn!(command = ?kind, %err, "command rejected");
        }
        result
    }
}
