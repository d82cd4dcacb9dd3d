// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use datasource_metrics::config::{ExtractorConfig, SubmissionMode};
use datasource_metrics::error::ConfigError;

fn clear_env() {
    for key in &["NAMESPACE", "SUBMISSION_MODE", "LOG_LEVEL"] {
        std::env::remove_var(key);
    }
}

// Environment variables are process-wide, so every case runs in one test.
#[test]
fn test_config_from_env() {
    clear_env();
    let result = ExtractorConfig::from_env();
    assert!(matches!(result, Err(ConfigError::MissingVariable("NAMESPACE"))));

    std::env::set_var("NAMESPACE", "SRE_Metrics");
    let config = ExtractorConfig::from_env().expect("config should load");
    assert_eq!(config.namespace, "SRE_Metrics");
    assert_eq!(config.submission_mode, SubmissionMode::PerPoint);
    assert_eq!(config.log_level, "info");

    std::env::set_var("NAMESPACE", "  DI_Metrics ");
    std::env::set_var("SUBMISSION_MODE", "batched");
    std::env::set_var("LOG_LEVEL", "DEBUG");
    let config = ExtractorConfig::from_env().expect("config should load");
    assert_eq!(config.namespace, "DI_Metrics");
    assert_eq!(config.submission_mode, SubmissionMode::Batched);
    assert_eq!(config.log_level, "debug");

    std::env::set_var("SUBMISSION_MODE", "sometimes");
    assert!(ExtractorConfig::from_env().is_err());
    std::env::remove_var("SUBMISSION_MODE");

    std::env::set_var("LOG_LEVEL", "loud");
    assert!(ExtractorConfig::from_env().is_err());
    std::env::remove_var("LOG_LEVEL");

    std::env::set_var("NAMESPACE", "AWS/EC2");
    assert!(matches!(
        ExtractorConfig::from_env(),
        Err(ConfigError::InvalidConfig(_))
    ));

    clear_env();
}
