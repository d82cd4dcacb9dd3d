// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Grammars shared with the log-producing application.
//!
//! Log groups are named `<prefix>_<instanceId>_<stream>` (for example
//! `SRE_i-0123_browser.scheduler.log`) and the application writes
//! `Datasources - complete in <N>ms` once a datasource refresh finishes.
//! Changing either pattern breaks the contract with the instances, so both are
//! kept here behind named functions.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{
    MAX_METRIC_VALUE, METRIC_NAME_SUFFIX, MILLIS_PER_SECOND, MIN_METRIC_VALUE,
};

lazy_static! {
    /// Three underscore-delimited segments: prefix, instance id, stream suffix.
    /// The prefix is restricted to ASCII word characters.
    static ref LOG_GROUP_REGEX: Regex =
        Regex::new(r"^((?-u:\w)+)_(.+)_(.+)$").expect("failed creating regex");

    /// Completion marker with the elapsed milliseconds, anywhere in the line.
    static ref COMPLETION_TIME_REGEX: Regex =
        Regex::new(r"Datasources - complete in ([0-9]+(?:\.[0-9]+)?)ms")
            .expect("failed creating regex");
}

/// Segments recovered from a log group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGroupIdentifier {
    pub prefix: String,
    pub instance_id: String,
    pub stream_suffix: String,
}

impl LogGroupIdentifier {
    /// Name of the metric published for this log group, e.g.
    /// `SRE_i-0123_DatasourcesCompleteTime`.
    #[must_use]
    pub fn metric_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.prefix, self.instance_id, METRIC_NAME_SUFFIX
        )
    }
}

/// Splits a log group name into its prefix, instance id and stream suffix.
///
/// Returns `None` when the name does not follow the naming convention.
#[must_use]
pub fn parse_log_group(log_group: &str) -> Option<LogGroupIdentifier> {
    let captures = LOG_GROUP_REGEX.captures(log_group)?;
    Some(LogGroupIdentifier {
        prefix: captures.get(1)?.as_str().to_string(),
        instance_id: captures.get(2)?.as_str().to_string(),
        stream_suffix: captures.get(3)?.as_str().to_string(),
    })
}

/// Returns the elapsed milliseconds reported by a completion log line.
///
/// Figures that cannot be published once converted to seconds (overflowing to
/// infinity or outside the CloudWatch value range) are treated as no match.
#[must_use]
pub fn parse_completion_time_ms(message: &str) -> Option<f64> {
    COMPLETION_TIME_REGEX
        .captures(message)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|millis| is_publishable_seconds(millis / MILLIS_PER_SECOND))
}

fn is_publishable_seconds(seconds: f64) -> bool {
    seconds.is_finite()
        && (seconds == 0.0 || (MIN_METRIC_VALUE..=MAX_METRIC_VALUE).contains(&seconds.abs()))
}
