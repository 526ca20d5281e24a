//! Integration tests for the account value objects.
//!
//! Exercise the public API the way persistence and API layers consume it.

use std::sync::Arc;
use std::thread;

use chrono::{Duration, TimeZone, Utc};

use account_values::{Clock, Email, Password, PasswordPolicy, SystemClock};
use domain::{FixedClock, MockClock, TextExt, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

fn fixed_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 10, 31, 9, 30, 0).unwrap())
}

// =============================================================================
// Email
// =============================================================================

#[test]
fn test_email_accepts_iff_canonical_form_matches_grammar() {
    let clock = fixed_clock();
    let cases = [
        (" TESTE@BALTA.IO ", Some("teste@balta.io")),
        ("teste@balta.io", Some("teste@balta.io")),
        ("tes=te@balta.io", None),
        ("teste @balta.io", None),
        ("", None),
        ("   ", None),
    ];

    for (raw, expected) in cases {
        let email = Email::try_create(Some(raw), &clock);
        assert_eq!(email.as_ref().map(Email::address), expected, "input {raw:?}");
    }
    assert!(Email::try_create(None, &clock).is_none());
}

#[test]
fn test_email_address_is_canonical() {
    let clock = fixed_clock();
    let raw = "\tFirst.Last+Tag@Example.COM ";
    let email = Email::try_create(Some(raw), &clock).unwrap();

    assert_eq!(email.address(), Email::canonicalize(raw));
    assert_eq!(
        Email::canonicalize(email.address()),
        email.address(),
        "canonicalization must be idempotent"
    );
    assert_eq!(email.address().trim(), email.address());
    assert_eq!(email.address().to_lowercase(), email.address());
}

#[test]
fn test_email_hash_is_pure_function_of_address() {
    let a = Email::try_create(Some("Teste@Balta.io"), &SystemClock).unwrap();
    let b = Email::try_create(Some(" teste@balta.IO"), &fixed_clock()).unwrap();

    assert_eq!(a.hash(), b.hash());
    assert_eq!(a.hash(), Email::hash_of(a.address()));
    assert!(!a.hash().is_empty());
}

#[test]
fn test_email_construction_timestamps_with_injected_clock() {
    let at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let mut clock = MockClock::new();
    clock.expect_utc_now().times(1).returning(move || at);

    let email = Email::try_create(Some("teste@balta.io"), &clock).unwrap();
    assert_eq!(email.to_text(), "teste@balta.io");
    assert_eq!(email.created_at_utc(), at);
}

// =============================================================================
// Password
// =============================================================================

#[test]
fn test_password_absent_and_empty_fail() {
    assert!(Password::try_create(None).is_none());
    assert!(Password::try_create(Some("")).is_none());
}

#[test]
fn test_password_length_policy() {
    assert!(Password::try_create(Some(&"x".repeat(MIN_PASSWORD_LENGTH - 1))).is_none());
    assert!(Password::try_create(Some("m#P52s@ap$V")).is_some());
    assert!(Password::try_create(Some(&"x".repeat(MAX_PASSWORD_LENGTH + 1))).is_none());
}

#[test]
fn test_password_salting_and_verification() {
    let secret = "m#P52s@ap$V";
    let first = Password::try_create(Some(secret)).unwrap();
    let second = Password::try_create(Some(secret)).unwrap();

    assert_ne!(first.hash(), second.hash());
    assert!(Password::verify(first.hash(), secret));
    assert!(Password::verify(second.hash(), secret));
    assert!(!Password::verify(first.hash(), "m#P52s@ap$W"));
}

#[test]
fn test_stored_hash_round_trip() {
    let secret = Password::generate_strong();
    let stored = Password::try_create(Some(&secret)).unwrap().to_text().to_string();

    let restored = Password::from_hash(stored).unwrap();
    assert!(restored.matches(&secret));
    assert!(restored.expires_at_utc().is_none());
    assert!(!restored.must_change());
}

#[test]
fn test_generated_passwords_pass_strict_policy() {
    let policy = PasswordPolicy::new(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, true).unwrap();

    for _ in 0..4 {
        let secret = policy.generate();
        assert!(Password::try_create_with(Some(&secret), &policy).is_some());
    }
}

#[test]
fn test_password_lifecycle_flags_are_independent() {
    let clock = fixed_clock();
    let mut password = Password::try_create(Some("m#P52s@ap$V")).unwrap();

    assert!(password.expires_at_utc().is_none());
    assert!(!password.must_change());
    assert!(!password.is_expired(&clock));

    password.mark_must_change();
    assert!(password.must_change());
    assert!(!password.is_expired(&clock));

    password.expire_at(clock.utc_now() - Duration::days(1));
    assert!(password.is_expired(&clock));
    assert!(password.must_change());
    assert!(password.matches("m#P52s@ap$V"));
}

#[test]
fn test_factories_usable_from_many_threads() {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                let email = Email::try_create(Some(&format!("user{i}@balta.io")), clock.as_ref());
                let secret = Password::generate_strong();
                let password = Password::try_create(Some(&secret)).unwrap();
                (email.is_some(), password.matches(&secret))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, true));
    }
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn test_text_to_base64() {
    for text in ["caca-as-bruxas", "halloween", "0123456789"] {
        assert!(!text.to_base64().is_empty());
    }
}
