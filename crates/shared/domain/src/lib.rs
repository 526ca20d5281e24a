//! Account value objects.
//!
//! Self-validating `Email` and `Password` values plus the clock and
//! policy they are built against. Factories return `None` on rejected
//! input, so holding a value is proof it passed validation.

pub mod clock;
pub mod constants;
pub mod email;
pub mod error;
pub mod extensions;
pub mod password;
pub mod policy;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use extensions::TextExt;
pub use password::Password;
pub use policy::PasswordPolicy;

#[cfg(any(test, feature = "test-utils"))]
pub use clock::MockClock;
