// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
}

impl Unit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Seconds => "Seconds",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation destined for the monitoring backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDataPoint {
    pub metric_name: String,
    pub unit: Unit,
    pub value: f64,
    /// Milliseconds since the epoch of the log line the value came from.
    pub timestamp_ms: Option<i64>,
}

impl MetricDataPoint {
    /// Builds a point from a millisecond duration, stored in seconds.
    #[must_use]
    pub fn from_millis(metric_name: &str, millis: f64, timestamp_ms: Option<i64>) -> Self {
        MetricDataPoint {
            metric_name: metric_name.to_string(),
            unit: Unit::Seconds,
            value: millis / crate::constants::MILLIS_PER_SECOND,
            timestamp_ms,
        }
    }
}

/// Points sharing a namespace, submitted in one `PutMetricData` call.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBatch {
    pub namespace: String,
    pub data_points: Vec<MetricDataPoint>,
}

impl MetricBatch {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        MetricBatch {
            namespace: namespace.to_string(),
            data_points: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    /// Splits the batch into one batch per point, keeping the original order.
    #[must_use]
    pub fn per_point(&self) -> Vec<MetricBatch> {
        self.data_points
            .iter()
            .map(|point| MetricBatch {
                namespace: self.namespace.clone(),
                data_points: vec![point.clone()],
            })
            .collect()
    }

    /// Splits the batch into batches of at most `max_points` points.
    #[must_use]
    pub fn chunked(&self, max_points: usize) -> Vec<MetricBatch> {
        self.data_points
            .chunks(max_points.max(1))
            .map(|chunk| MetricBatch {
                namespace: self.namespace.clone(),
                data_points: chunk.to_vec(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_of(n: usize) -> MetricBatch {
        let mut batch = MetricBatch::new("SRE_Metrics");
        for i in 0..n {
            batch.data_points.push(MetricDataPoint::from_millis(
                "SRE_i-0123_DatasourcesCompleteTime",
                i as f64,
                None,
            ));
        }
        batch
    }

    #[test]
    fn test_from_millis_converts_to_seconds() {
        let point = MetricDataPoint::from_millis("m", 45231.0, Some(1_700_000_000_000));
        assert_eq!(point.value, 45.231);
        assert_eq!(point.unit, Unit::Seconds);
        assert_eq!(point.timestamp_ms, Some(1_700_000_000_000));
    }

    #[test]
    fn test_per_point_keeps_order() {
        let batches = batch_of(3).per_point();
        assert_eq!(batches.len(), 3);
        for (i, batch) in batches.iter().enumerate() {
            assert_eq!(batch.namespace, "SRE_Metrics");
            assert_eq!(batch.len(), 1);
            assert_eq!(batch.data_points[0].value, i as f64 / 1000.0);
        }
    }

    #[test]
    fn test_chunked() {
        let batches = batch_of(2_500).chunked(1_000);
        let sizes: Vec<usize> = batches.iter().map(MetricBatch::len).collect();
        assert_eq!(sizes, vec![1_000, 1_000, 500]);

        assert!(batch_of(0).chunked(1_000).is_empty());
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Seconds.to_string(), "Seconds");
    }
}
