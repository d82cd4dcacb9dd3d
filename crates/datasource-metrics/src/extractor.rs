// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Log delivery to metric pipeline.
//!
//! ```text
//!   awslogs.data (base64 + gzip)
//!         │  decode_payload
//!         v
//!      LogsData ──── parse_log_group ───> metric name
//!         │
//!         │  parse_completion_time_ms, per log event
//!         v
//!     MetricBatch ─── SubmissionMode ───> MetricSink::put_metric_data
//! ```
//!
//! Decoding and log group errors abort the invocation. Log lines without the
//! completion marker are skipped. A failed submission is logged and the
//! remaining ones are still attempted; the invocation only fails when every
//! attempted submission failed.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::{ExtractorConfig, SubmissionMode};
use crate::constants::MAX_DATUMS_PER_REQUEST;
use crate::error::ExtractionError;
use crate::metric::{MetricBatch, MetricDataPoint};
use crate::patterns::{parse_completion_time_ms, parse_log_group};
use crate::payload::{decode_payload, LogsData, MessageType};
use crate::sink::MetricSink;

/// Outcome of one processed delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Data points extracted from the delivery
    pub points: usize,
    /// `PutMetricData` calls attempted
    pub submissions: usize,
    /// Calls that failed
    pub failed_submissions: usize,
}

/// Builds the metric batch for a decoded delivery.
///
/// The log group is validated before any log event is looked at, so a
/// malformed group never yields points.
pub fn extract_metrics(data: &LogsData, namespace: &str) -> Result<MetricBatch, ExtractionError> {
    let mut batch = MetricBatch::new(namespace);

    if data.message_type == MessageType::ControlMessage {
        debug!("Skipping control message for log group '{}'", data.log_group);
        return Ok(batch);
    }

    info!("log group name: {}", data.log_group);
    let group = parse_log_group(&data.log_group)
        .ok_or_else(|| ExtractionError::UnrecognizedLogGroupFormat(data.log_group.clone()))?;
    let metric_name = group.metric_name();
    info!("metric namespace: {namespace}");
    info!("metric name: {metric_name}");

    for (i, event) in data.log_events.iter().enumerate() {
        debug!("Message {i}: {}", event.message);
        match parse_completion_time_ms(&event.message) {
            Some(millis) => {
                let point = MetricDataPoint::from_millis(&metric_name, millis, event.timestamp);
                debug!("Complete time seconds: {}", point.value);
                batch.data_points.push(point);
            }
            None => debug!("Message {i} has no completion time, skipping"),
        }
    }

    Ok(batch)
}

#[derive(Clone)]
pub struct LogEventMetricExtractor {
    namespace: String,
    submission_mode: SubmissionMode,
    sink: Arc<dyn MetricSink>,
}

impl LogEventMetricExtractor {
    #[must_use]
    pub fn new(config: &ExtractorConfig, sink: Arc<dyn MetricSink>) -> Self {
        LogEventMetricExtractor {
            namespace: config.namespace.clone(),
            submission_mode: config.submission_mode,
            sink,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Decodes a delivery and extracts its metrics without submitting them.
    pub fn extract(&self, raw_base64: &str) -> Result<MetricBatch, ExtractionError> {
        let data = decode_payload(raw_base64)?;
        debug!("Decoded log payload: {:?}", data);
        extract_metrics(&data, &self.namespace)
    }

    /// Decodes a delivery, extracts its metrics and submits them.
    pub async fn process_batch(&self, raw_base64: &str) -> Result<ProcessReport, ExtractionError> {
        let batch = self.extract(raw_base64)?;
        self.submit(&batch).await
    }

    /// Submits an extracted batch according to the configured mode.
    pub async fn submit(&self, batch: &MetricBatch) -> Result<ProcessReport, ExtractionError> {
        let mut report = ProcessReport {
            points: batch.len(),
            ..ProcessReport::default()
        };
        if batch.is_empty() {
            debug!("No completion times found, nothing to submit");
            return Ok(report);
        }

        let requests = match self.submission_mode {
            SubmissionMode::PerPoint => batch.per_point(),
            SubmissionMode::Batched => batch.chunked(MAX_DATUMS_PER_REQUEST),
        };

        for request in &requests {
            report.submissions += 1;
            match self.sink.put_metric_data(request).await {
                Ok(()) => debug!(
                    "putMetricData success: {} datums to {}",
                    request.len(),
                    request.namespace
                ),
                Err(e) => {
                    report.failed_submissions += 1;
                    error!("putMetricData error: {e}");
                }
            }
        }

        if report.failed_submissions == report.submissions {
            return Err(ExtractionError::AllSubmissionsFailed {
                attempted: report.submissions,
            });
        }

        info!(
            "Submitted {} of {} metric requests ({} points)",
            report.submissions - report.failed_submissions,
            report.submissions,
            report.points
        );
        Ok(report)
    }
}
