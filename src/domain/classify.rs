use serde::{Deserialize, Serialize};

/// User-facing load error, shown on the error screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadError {
    /// Short error category (headline)
    pub title: String,
    /// Longer explanation, includes the raw engine message when one exists
    pub detail: String,
}

/// Classifies a raw engine error message into a user-facing category.
///
/// Case-insensitive substring match, first match wins. Total: every input,
/// including the empty string, yields a non-empty title and detail.
pub fn classify(raw: &str) -> LoadError {
    // Engine codes use underscores ("net::ERR_NAME_NOT_RESOLVED"), prose
    // descriptions use spaces; fold them together before matching
    let needle = raw.to_lowercase().replace('_', " ");

    let (title, hint) = if needle.contains("name not resolved") {
        (
            "Connection Error",
            "The server address could not be resolved. Check your internet connection and retry.",
        )
    } else if needle.contains("internet") {
        (
            "No Internet Connection",
            "You appear to be offline. Reconnect and retry.",
        )
    } else if needle.contains("timeout") || needle.contains("timed out") {
        (
            "Connection Timeout",
            "The server took too long to respond. Retry in a moment.",
        )
    } else if needle.contains("ssl") || needle.contains("certificate") {
        (
            "Security Error",
            "A secure connection to the server could not be established.",
        )
    } else if needle.contains("domain") || needle.contains("undefined") {
        ("Unable to Load Page", "The page's domain could not be reached.")
    } else {
        (
            "Unable to Load Page",
            "Something went wrong while loading the page. Retry in a moment.",
        )
    };

    let raw = raw.trim();
    let detail = if raw.is_empty() {
        hint.to_string()
    } else {
        format!("{hint} ({raw})")
    };

    LoadError {
        title: title.to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("net::ERR_NAME_NOT_RESOLVED", "Connection Error")]
    #[case("NET::ERR_NAME_NOT_RESOLVED", "Connection Error")]
    #[case("net::err_name_not_resolved", "Connection Error")]
    #[case("net::ERR_INTERNET_DISCONNECTED", "No Internet Connection")]
    #[case("net::ERR_CONNECTION_TIMED_OUT", "Connection Timeout")]
    #[case("request timeout", "Connection Timeout")]
    #[case("net::ERR_SSL_PROTOCOL_ERROR", "Security Error")]
    #[case("invalid certificate chain", "Security Error")]
    #[case("domain unreachable", "Unable to Load Page")]
    #[case("undefined error", "Unable to Load Page")]
    #[case("HTTP 503: Service Unavailable", "Unable to Load Page")]
    #[case("something odd happened", "Unable to Load Page")]
    fn test_classify_titles(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(classify(raw).title, expected);
    }

    #[test]
    fn test_classify_is_total_on_empty_input() {
        let err = classify("");
        assert!(!err.title.is_empty());
        assert!(!err.detail.is_empty());
    }

    #[test]
    fn test_classify_priority_order() {
        // "name not resolved" outranks the later "internet" rule in one message
        let err = classify("name not resolved; check internet");
        assert_eq!(err.title, "Connection Error");
    }

    #[test]
    fn test_classify_detail_carries_raw_message() {
        let err = classify("HTTP 503: Service Unavailable");
        assert!(err.detail.contains("HTTP 503"));
    }

    #[test]
    fn test_classify_detail_trims_whitespace_only_input() {
        let err = classify("   ");
        assert!(!err.detail.contains('('));
    }
}
