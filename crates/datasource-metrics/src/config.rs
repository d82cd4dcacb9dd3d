// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, NAMESPACE_ENV, SUBMISSION_MODE_ENV};
use crate::error::ConfigError;
use crate::util::parse_metric_namespace;

/// How extracted points are grouped into `PutMetricData` calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionMode {
    /// One call per matching log line, in log order.
    #[default]
    PerPoint,
    /// All points of an invocation in as few calls as the backend allows.
    Batched,
}

impl FromStr for SubmissionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_point" | "per-point" => Ok(SubmissionMode::PerPoint),
            "batched" => Ok(SubmissionMode::Batched),
            other => Err(ConfigError::InvalidConfig(format!(
                "Invalid submission mode '{other}'. Must be one of: per_point, batched"
            ))),
        }
    }
}

/// Configuration of the log-to-metric function
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// CloudWatch namespace the metrics are published under
    pub namespace: String,
    pub submission_mode: SubmissionMode,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
}

impl ExtractorConfig {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            submission_mode: SubmissionMode::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_namespace =
            env::var(NAMESPACE_ENV).map_err(|_| ConfigError::MissingVariable(NAMESPACE_ENV))?;
        let namespace = parse_metric_namespace(&raw_namespace).ok_or_else(|| {
            ConfigError::InvalidConfig(format!("Invalid metric namespace '{raw_namespace}'"))
        })?;
        let submission_mode = match env::var(SUBMISSION_MODE_ENV) {
            Ok(val) => val.parse::<SubmissionMode>()?,
            Err(_) => SubmissionMode::default(),
        };
        let log_level = env::var(LOG_LEVEL_ENV)
            .map(|val| val.to_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let config = Self {
            namespace,
            submission_mode,
            log_level,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if parse_metric_namespace(&self.namespace).as_deref() != Some(self.namespace.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Invalid metric namespace '{}'",
                self.namespace
            )));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }
}
