use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: CommandKind },
    #[error("Owner is required for {kind:?}")]
    OwnerRequired { kind: CommandKind },
    #[error("Target account is required for {kind:?}")]
    TargetRequired { kind: CommandKind },
}

/// A fully parsed ledger command. Field presence is settled here; whether
/// the amounts are acceptable stays with [`crate::account`].
#[derive(Debug, Clone)]
pub enum LedgerCommand {
    Open {
        id: AccountId,
        owner: String,
        initial_balance: Decimal,
        min_balance: Decimal,
    },
    Deposit {
        id: AccountId,
        amount: Decimal,
    },
    Withdraw {
        id: AccountId,
        amount: Decimal,
    },
    Transfer {
        id: AccountId,
        target: AccountId,
        amount: Decimal,
    },
}

impl LedgerCommand {
    /// Builds a command from the raw row fields, rejecting rows where a
    /// field the command kind needs was left empty. A missing `min_balance`
    /// on `open` defaults to zero.
    pub fn parse(
        kind: CommandKind,
        id: AccountId,
        owner: Option<String>,
        target: Option<AccountId>,
        amount: Option<Decimal>,
        min_balance: Option<Decimal>,
    ) -> Result<Self, CommandError> {
        match kind {
            CommandKind::Open => Ok(Self::Open {
                id,
                owner: owner.ok_or(CommandError::OwnerRequired { kind })?,
                initial_balance: amount.ok_or(CommandError::AmountRequired { kind })?,
                min_balance: min_balance.unwrap_or_else(Decimal::zero),
            }),
            CommandKind::Deposit => Ok(Self::Deposit {
                id,
                amount: amount.ok_or(CommandError::AmountRequired { kind })?,
            }),
            CommandKind::Withdraw => Ok(Self::Withdraw {
                id,
                amount: amount.ok_or(CommandError::AmountRequired { kind })?,
            }),
            CommandKind::Transfer => Ok(Self::Transfer {
                id,
                target: target.ok_or(CommandError::TargetRequired { kind })?,
                amount: amount.ok_or(CommandError::AmountRequired { kind })?,
            }),
        }
    }
}
