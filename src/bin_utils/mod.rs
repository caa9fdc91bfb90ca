//! This module could be a separate crate on its own, to bootstrap [`teller`] within binary
//! but for simplicitly purposes, I include this module directly in binary.

use std::io::{Read, Write};

use crate::processor::{
    CommandProcessError, CommandProcessor, in_memory_ledger::InMemoryLedger,
};
use anyhow::Result;
use csv_parser::CsvCommandParser;
use csv_printer::{AccountState, print_accounts};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, CommandProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvCommandParser::new(self.input);

        let mut ledger = InMemoryLedger::default();

        for (line, row) in parser {
            if let Err(err) = ledger.process_command(
                row.kind,
                row.account,
                row.owner,
                row.target,
                row.amount,
                row.min_balance,
            ) {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(
            self.output,
            ledger.accounts.values().map(|acc| AccountState {
                account: acc.id().to_owned(),
                owner: acc.owner().to_owned(),
                balance: acc.balance(),
                min_balance: acc.min_balance(),
            }),
        )
    }
}
