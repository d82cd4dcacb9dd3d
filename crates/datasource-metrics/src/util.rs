// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for metric publishing.

use crate::constants::{MAX_NAMESPACE_LEN, RESERVED_NAMESPACE_PREFIX};

/// Parses and validates a metric namespace according to CloudWatch naming rules.
///
/// A valid namespace must:
/// - Not be empty or contain only whitespace
/// - Be at most 255 characters long
/// - Contain only ASCII alphanumerics, spaces, or one of `. - _ / # :`
/// - Not start with the reserved `AWS/` prefix
///
/// Surrounding whitespace is trimmed from the input.
///
/// # Examples
///
/// ```
/// use datasource_metrics::util::parse_metric_namespace;
///
/// assert_eq!(parse_metric_namespace("SRE_Metrics"), Some("SRE_Metrics".to_string()));
/// assert_eq!(parse_metric_namespace("Custom/App"), Some("Custom/App".to_string()));
/// assert_eq!(parse_metric_namespace("AWS/EC2"), None);
/// assert_eq!(parse_metric_namespace("my$app"), None);
/// ```
pub fn parse_metric_namespace(namespace: &str) -> Option<String> {
    let trimmed = namespace.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() > MAX_NAMESPACE_LEN {
        tracing::error!(
            "NAMESPACE is {} characters long, the limit is {}. Ignoring namespace.",
            trimmed.len(),
            MAX_NAMESPACE_LEN
        );
        return None;
    }

    if trimmed.starts_with(RESERVED_NAMESPACE_PREFIX) {
        tracing::error!(
            "NAMESPACE must not start with the reserved prefix '{}', got: '{}'. Ignoring namespace.",
            RESERVED_NAMESPACE_PREFIX,
            trimmed
        );
        return None;
    }

    if let Some(invalid_char) = trimmed.chars().find(|&ch| {
        !ch.is_ascii_alphanumeric() && !matches!(ch, '.' | '-' | '_' | '/' | '#' | ':' | ' ')
    }) {
        tracing::error!(
            "NAMESPACE contains invalid character '{}' in '{}'. Ignoring namespace.",
            invalid_char,
            trimmed
        );
        return None;
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_namespace_valid() {
        assert_eq!(
            parse_metric_namespace("SRE_Metrics"),
            Some("SRE_Metrics".to_string())
        );
        assert_eq!(
            parse_metric_namespace("Custom/App-1.metrics"),
            Some("Custom/App-1.metrics".to_string())
        );
        assert_eq!(
            parse_metric_namespace("team:sre #1"),
            Some("team:sre #1".to_string())
        );
    }

    #[test]
    fn test_parse_metric_namespace_with_whitespace() {
        assert_eq!(
            parse_metric_namespace("  SRE_Metrics \n"),
            Some("SRE_Metrics".to_string())
        );
    }

    #[test]
    fn test_parse_metric_namespace_empty() {
        assert_eq!(parse_metric_namespace(""), None);
        assert_eq!(parse_metric_namespace("   "), None);
        assert_eq!(parse_metric_namespace("\t\n"), None);
    }

    #[test]
    fn test_parse_metric_namespace_reserved_prefix() {
        assert_eq!(parse_metric_namespace("AWS/EC2"), None);
        assert_eq!(
            parse_metric_namespace("AWSCustom"),
            Some("AWSCustom".to_string())
        );
    }

    #[test]
    fn test_parse_metric_namespace_too_long() {
        assert_eq!(parse_metric_namespace(&"a".repeat(256)), None);
        assert!(parse_metric_namespace(&"a".repeat(255)).is_some());
    }

    #[test]
    fn test_parse_metric_namespace_invalid_characters() {
        assert_eq!(parse_metric_namespace("my$app"), None);
        assert_eq!(parse_metric_namespace("my@app"), None);
        assert_eq!(parse_metric_namespace("my!app"), None);
        assert_eq!(parse_metric_namespace("métriques"), None);
    }
}
