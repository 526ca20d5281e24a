//! Password command - generate, hash and verify.

use common::{AppError, AppResult};
use domain::Password;

use crate::cli::args::{PasswordAction, PasswordArgs};
use crate::config::Config;

/// Execute the password command
pub fn execute(args: PasswordArgs, config: &Config) -> AppResult<()> {
    println!("{}", render(&args, config)?);
    Ok(())
}

/// Run the requested action and format the result
pub fn render(args: &PasswordArgs, config: &Config) -> AppResult<String> {
    let policy = config.password_policy()?;

    match &args.action {
        PasswordAction::Generate => {
            tracing::info!(
                min = policy.min_length(),
                max = policy.max_length(),
                "Generating password"
            );
            Ok(policy.generate())
        }
        PasswordAction::Hash { secret } => {
            let password = Password::parse(secret, &policy)?;
            tracing::info!("Password hashed");
            Ok(password.to_text().to_string())
        }
        PasswordAction::Verify { hash, secret } => {
            if Password::verify(hash, secret) {
                Ok("match".to_string())
            } else {
                Err(AppError::validation("Password does not match"))
            }
        }
    }
}
