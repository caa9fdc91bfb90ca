use std::fs::File;

use anyhow::{Context, Result};
use teller::bin_utils::Service;
use teller::processor::CommandProcessError;

fn main() -> Result<()> {
    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            // business rejections, the command was well formed
            CommandProcessError::AccountErr(err) => eprintln!("Rejected at line {line}: {err}"),
            err => eprintln!("Error at line {line}: {err}"),
        }),
    };
    service.run()
}
