// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! [`MetricSink`] backed by CloudWatch `PutMetricData`.

use async_trait::async_trait;
use aws_sdk_cloudwatch::{
    error::DisplayErrorContext,
    primitives::DateTime,
    types::{MetricDatum, StandardUnit},
    Client,
};
use tracing::debug;

use crate::error::SubmissionError;
use crate::metric::{MetricBatch, MetricDataPoint, Unit};
use crate::sink::MetricSink;

#[derive(Clone, Debug)]
pub struct CloudWatchSink {
    client: Client,
}

impl CloudWatchSink {
    #[must_use]
    pub fn new(client: Client) -> Self {
        CloudWatchSink { client }
    }
}

fn standard_unit(unit: Unit) -> StandardUnit {
    match unit {
        Unit::Seconds => StandardUnit::Seconds,
    }
}

/// Maps a data point onto the SDK datum type.
#[must_use]
pub fn to_datum(point: &MetricDataPoint) -> MetricDatum {
    MetricDatum::builder()
        .metric_name(&point.metric_name)
        .unit(standard_unit(point.unit))
        .value(point.value)
        .set_timestamp(point.timestamp_ms.map(DateTime::from_millis))
        .build()
}

#[async_trait]
impl MetricSink for CloudWatchSink {
    async fn put_metric_data(&self, batch: &MetricBatch) -> Result<(), SubmissionError> {
        let datums: Vec<MetricDatum> = batch.data_points.iter().map(to_datum).collect();
        debug!(
            "PutMetricData namespace={} datums={}",
            batch.namespace,
            datums.len()
        );

        self.client
            .put_metric_data()
            .namespace(&batch.namespace)
            .set_metric_data(Some(datums))
            .send()
            .await
            .map_err(|e| SubmissionError {
                namespace: batch.namespace.clone(),
                datums: batch.len(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}
