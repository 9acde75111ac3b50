//! Cross-process identity of a running component instance.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity the transport hands us for each launched component.
///
/// The core only compares and hashes tokens. `Token::nil()` stands in for a
/// null remote object and is rejected by every operation that needs a real
/// identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Token(Uuid);

impl Token {
    /// Mint a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The null token.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_token_is_null() {
        assert!(Token::nil().is_null());
        assert!(Token::default().is_null());
        assert!(!Token::new().is_null());
    }

    #[test]
    fn test_tokens_are_distinct() {
        let a = Token::new();
        let b = Token::new();
        assert_ne!(a, b);
        assert_eq!(a, Token::from_uuid(*a.as_uuid()));
    }
}
