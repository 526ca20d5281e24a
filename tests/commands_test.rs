//! Command layer tests.
//!
//! Run commands against in-memory configuration without touching the
//! process environment.

use account_values::cli::args::{EmailArgs, PasswordAction, PasswordArgs, TextAction, TextArgs};
use account_values::commands;
use account_values::config::Config;
use account_values::{AppError, Email, Password, SystemClock};

fn password(action: PasswordAction) -> PasswordArgs {
    PasswordArgs { action }
}

#[test]
fn test_email_command_prints_canonical_address_and_hash() {
    let args = EmailArgs {
        address: "  Teste@Balta.IO ".to_string(),
    };

    let output = commands::email::render(&args, &SystemClock).unwrap();

    assert_eq!(
        output,
        format!("address: teste@balta.io\nhash: {}", Email::hash_of("teste@balta.io"))
    );
}

#[test]
fn test_email_command_rejects_invalid_address() {
    let args = EmailArgs {
        address: "tes=te@balta.io".to_string(),
    };

    let err = commands::email::render(&args, &SystemClock).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_password_generate_then_hash_then_verify() {
    let config = Config::default();

    let secret = commands::password::render(&password(PasswordAction::Generate), &config).unwrap();
    let hash = commands::password::render(
        &password(PasswordAction::Hash {
            secret: secret.clone(),
        }),
        &config,
    )
    .unwrap();

    assert_ne!(hash, secret);
    assert!(Password::verify(&hash, &secret));

    let verdict = commands::password::render(
        &password(PasswordAction::Verify {
            hash: hash.clone(),
            secret,
        }),
        &config,
    )
    .unwrap();
    assert_eq!(verdict, "match");
}

#[test]
fn test_password_verify_mismatch_is_error() {
    let config = Config::default();
    let hash = Password::try_create(Some("m#P52s@ap$V")).unwrap().to_text().to_string();

    let result = commands::password::render(
        &password(PasswordAction::Verify {
            hash,
            secret: "not-the-secret".to_string(),
        }),
        &config,
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_password_hash_respects_configured_policy() {
    let mut config = Config::default();
    config.password_policy.min_length = 12;

    let result = commands::password::render(
        &password(PasswordAction::Hash {
            secret: "m#P52s@ap$V".to_string(),
        }),
        &config,
    );

    let err = result.unwrap_err();
    assert_eq!(err.user_message(), "Password must be at least 12 characters");
}

#[test]
fn test_password_command_rejects_bad_config() {
    let mut config = Config::default();
    config.password_policy.min_length = 60;

    let result = commands::password::render(&password(PasswordAction::Generate), &config);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_text_base64_command() {
    let args = TextArgs {
        action: TextAction::Base64 {
            text: "halloween".to_string(),
        },
    };

    assert_eq!(commands::text::render(&args), "aGFsbG93ZWVu");
}
