//! String helpers shared across the account domain.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Extension methods on text.
pub trait TextExt {
    /// Standard-alphabet, padded base64 of the UTF-8 bytes.
    fn to_base64(&self) -> String;
}

impl TextExt for str {
    fn to_base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }
}
