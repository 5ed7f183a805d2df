use std::fmt;

/// Credentials of the caller on whose behalf backend requests are made.
///
/// The token is opaque here; the backend validates it.
#[derive(Clone, PartialEq, Eq)]
pub struct CallerContext {
    token: String,
}

impl CallerContext {
    /// Returns `None` for an empty or whitespace-only token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self { token })
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`.
    pub fn from_authorization(header: &str) -> Option<Self> {
        header
            .strip_prefix("Bearer ")
            .and_then(|token| Self::new(token.trim()))
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for CallerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallerContext")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_parsed() {
        let caller = CallerContext::from_authorization("Bearer abc.def.ghi").unwrap();
        assert_eq!(caller.token(), "abc.def.ghi");
    }

    #[test]
    fn test_malformed_headers_rejected() {
        assert!(CallerContext::from_authorization("").is_none());
        assert!(CallerContext::from_authorization("Bearer").is_none());
        assert!(CallerContext::from_authorization("Bearer    ").is_none());
        assert!(CallerContext::from_authorization("Basic dXNlcjpwYXNz").is_none());
        assert!(CallerContext::from_authorization("abc.def.ghi").is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let caller = CallerContext::new("secret-token").unwrap();
        let rendered = format!("{:?}", caller);
        assert!(!rendered.contains("secret-token"));
    }
}
