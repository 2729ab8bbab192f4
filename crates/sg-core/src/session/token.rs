use std::fmt;

use zeroize::Zeroize;

/// Opaque credential handed out by the identity provider.
///
/// No format is assumed beyond being non-empty. The value never shows up in
/// `Debug`/`Display` output and is wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialToken {
    inner: String,
}

/// Raised when the identity provider hands over an empty token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("credential token is empty")]
pub struct EmptyCredentialToken;

impl CredentialToken {
    /// Wrap a raw token, rejecting empty or whitespace-only input.
    pub fn parse(value: impl Into<String>) -> Result<Self, EmptyCredentialToken> {
        let inner = value.into();
        if inner.trim().is_empty() {
            return Err(EmptyCredentialToken);
        }
        Ok(Self { inner })
    }

    /// Borrow the raw token. Only adapters that talk to storage or the
    /// profile service should need this.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialToken([REDACTED])")
    }
}

impl fmt::Display for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for CredentialToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_tokens() {
        assert_eq!(CredentialToken::parse(""), Err(EmptyCredentialToken));
        assert_eq!(CredentialToken::parse("   "), Err(EmptyCredentialToken));
    }

    #[test]
    fn debug_and_display_are_redacted() {
        let token = CredentialToken::parse("super-secret").unwrap();
        assert!(!format!("{:?}", token).contains("super-secret"));
        assert_eq!(token.to_string(), "[REDACTED]");
        assert_eq!(token.expose(), "super-secret");
    }
}
