// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::error::SubmissionError;
use crate::metric::MetricBatch;

/// Destination for extracted metrics.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Submits every point of `batch` in a single backend call.
    async fn put_metric_data(&self, batch: &MetricBatch) -> Result<(), SubmissionError>;
}
