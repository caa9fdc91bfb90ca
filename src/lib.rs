/// All logic related to account balance management.
/// Each account guards its own balance with an exclusive lock, so a shared
/// account handle can be mutated from any number of threads.
pub mod account;

/// Pure amount and floor checks used by [`account`] operations.
pub mod policy;

/// Typed ledger commands parsed from raw tabular rows, executed by [`processor`].
pub mod command;

/// Command processor interface, plus "in memory" ledger implementation.
/// Coordinates command parsing, account lookup and execution.
///
/// NOTE: Technically this interface is not necessary, but it might be
/// good integration point to replace in memory implementation with
/// something more sophisticated.
pub mod processor;

/// Ideally, this module should exists on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
