//! Email command - canonical address and lookup hash.

use common::AppResult;
use domain::{Clock, Email};

use crate::cli::args::EmailArgs;

/// Execute the email command
pub fn execute(args: EmailArgs, clock: &dyn Clock) -> AppResult<()> {
    println!("{}", render(&args, clock)?);
    Ok(())
}

/// Validate the address and format the result
pub fn render(args: &EmailArgs, clock: &dyn Clock) -> AppResult<String> {
    let email = Email::parse(&args.address, clock)?;
    tracing::info!("Email accepted");

    Ok(format!("address: {}\nhash: {}", email.to_text(), email.hash()))
}
