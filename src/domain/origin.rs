/// Same-origin navigation policy.
///
/// A URL is allowed when it starts with the configured origin prefix
/// (scheme+host, optionally a path prefix). Every top-level navigation is
/// answered synchronously through this check; everything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    origin: String,
}

impl OriginPolicy {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Exact prefix match; an empty policy allows nothing.
    pub fn allows(&self, url: &str) -> bool {
        !self.origin.is_empty() && url.starts_with(&self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new("https://app.example.com")
    }

    #[test]
    fn test_origin_prefix_is_allowed() {
        assert!(policy().allows("https://app.example.com"));
        assert!(policy().allows("https://app.example.com/"));
        assert!(policy().allows("https://app.example.com/dashboard?tab=1"));
    }

    #[test]
    fn test_foreign_urls_are_rejected() {
        assert!(!policy().allows("https://evil.example.com/"));
        assert!(!policy().allows("http://app.example.com/"));
        assert!(!policy().allows("about:blank"));
    }

    #[test]
    fn test_empty_policy_allows_nothing() {
        let policy = OriginPolicy::new("");
        assert!(!policy.allows("https://app.example.com/"));
        assert!(!policy.allows(""));
    }
}
