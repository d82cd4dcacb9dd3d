// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Suffix appended to `<prefix>_<instanceId>` to build the metric name.
pub const METRIC_NAME_SUFFIX: &str = "DatasourcesCompleteTime";

/// Maximum number of datums CloudWatch accepts in one `PutMetricData` call.
pub const MAX_DATUMS_PER_REQUEST: usize = 1_000;

/// Maximum length of a CloudWatch metric namespace.
pub const MAX_NAMESPACE_LEN: usize = 255;

/// Namespace prefix reserved for AWS service metrics.
pub const RESERVED_NAMESPACE_PREFIX: &str = "AWS/";

pub const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Largest magnitude CloudWatch accepts for a datum value.
pub const MAX_METRIC_VALUE: f64 = 1.174_271e108;

/// Smallest non-zero magnitude CloudWatch accepts for a datum value.
pub const MIN_METRIC_VALUE: f64 = 8.515_920e-109;

pub const NAMESPACE_ENV: &str = "NAMESPACE";
pub const SUBMISSION_MODE_ENV: &str = "SUBMISSION_MODE";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "info";
