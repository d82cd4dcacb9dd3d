// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors that abort the processing of a log delivery.
///
/// Any of these is reported to the invoking platform as a failed invocation,
/// which then applies its own redelivery policy.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Failed to decompress log payload: {0}")]
    DecompressionFailed(String),

    #[error("Invalid log payload: {0}")]
    InvalidPayload(String),

    #[error("Log group '{0}' does not match <prefix>_<instanceId>_<stream>")]
    UnrecognizedLogGroupFormat(String),

    #[error("All {attempted} metric submissions failed")]
    AllSubmissionsFailed { attempted: usize },
}

/// A single `PutMetricData` call that the backend rejected or never answered.
#[derive(Debug, thiserror::Error)]
#[error("Failed to submit {datums} datums to namespace '{namespace}': {reason}")]
pub struct SubmissionError {
    pub namespace: String,
    pub datums: usize,
    pub reason: String,
}

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ExtractionError::UnrecognizedLogGroupFormat("malformed".to_string());
        assert_eq!(
            error.to_string(),
            "Log group 'malformed' does not match <prefix>_<instanceId>_<stream>"
        );

        let error = ExtractionError::AllSubmissionsFailed { attempted: 3 };
        assert_eq!(error.to_string(), "All 3 metric submissions failed");
    }

    #[test]
    fn test_submission_error_display() {
        let error = SubmissionError {
            namespace: "SRE_Metrics".to_string(),
            datums: 2,
            reason: "throttled".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to submit 2 datums to namespace 'SRE_Metrics': throttled"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::MissingVariable("NAMESPACE");
        assert_eq!(
            error.to_string(),
            "Missing required environment variable NAMESPACE"
        );
    }
}
