// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Converts CloudWatch Logs subscription deliveries into datasource
//! completion-time metrics.
//!
//! A delivery is decoded ([`payload`]), matched against the log group naming
//! convention and the completion marker ([`patterns`]), turned into
//! [`metric::MetricDataPoint`]s and handed to a [`sink::MetricSink`] by the
//! [`extractor::LogEventMetricExtractor`].

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod cloudwatch;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod metric;
pub mod patterns;
pub mod payload;
pub mod sink;
pub mod util;
