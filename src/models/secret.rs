//! Opaque holder for account passwords
//!
//! Passwords are stored and compared in plaintext because the account file
//! format carries them that way. This type keeps them out of `Debug` and
//! `Display` output and zeroes the buffer on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A password that is never printed and is zeroed on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    inner: String,
}

impl Secret {
    /// Wrap a plaintext value
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Exact, case-sensitive comparison against a candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.inner == candidate
    }

    /// The plaintext, for writing the account record only
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.inner)
    }
}

impl Eq for Secret {}

// Don't print the contents in Debug output
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret").field("len", &self.inner.len()).finish()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact() {
        let secret = Secret::new("pass123");
        assert!(secret.matches("pass123"));
        assert!(!secret.matches("PASS123"));
        assert!(!secret.matches("pass123 "));
        assert!(!secret.matches(""));
    }

    #[test]
    fn test_debug_and_display_are_redacted() {
        let secret = Secret::new("neha@123");
        let debug = format!("{:?}", secret);
        let display = format!("{}", secret);

        assert!(!debug.contains("neha"));
        assert!(!display.contains("neha"));
        assert_eq!(display, "[REDACTED 8 bytes]");
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut secret = Secret::new("java456");
        secret.zeroize();
        assert!(secret.expose().is_empty());
    }
}
