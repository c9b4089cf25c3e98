//! API credentials.

use std::fmt;

/// A Generative Language API key.
///
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The raw key, for the request header only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let key = ApiKey::new("AIza-secret");
        let debug = format!("{key:?}");
        assert!(!debug.contains("AIza"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn new_trims_whitespace() {
        let key = ApiKey::new("  abc\n");
        assert_eq!(key.expose(), "abc");
        assert!(ApiKey::new("   ").is_empty());
    }
}
