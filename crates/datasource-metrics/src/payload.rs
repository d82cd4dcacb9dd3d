// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! CloudWatch Logs subscription delivery format.
//!
//! The function is invoked with `{"awslogs": {"data": "<base64>"}}`, where
//! `data` is a gzip-compressed JSON document describing the matched events.

use std::io::Read;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Invocation argument sent by a subscription filter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogsEvent {
    #[serde(rename = "awslogs")]
    pub aws_logs: AwsLogs,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AwsLogs {
    pub data: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    #[default]
    DataMessage,
    /// Sent by CloudWatch Logs to check that the destination is reachable.
    ControlMessage,
}

/// Decompressed delivery.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsData {
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub owner: Option<String>,
    pub log_group: String,
    #[serde(default)]
    pub log_stream: Option<String>,
    #[serde(default)]
    pub subscription_filters: Vec<String>,
    #[serde(default)]
    pub log_events: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogEntry {
    #[serde(default)]
    pub id: Option<String>,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub message: String,
}

/// Base64-decodes and gunzips a delivery, returning the raw JSON bytes.
///
/// Every byte must belong to a gzip member; trailing data that is not a valid
/// member is rejected.
pub fn decompress(raw_base64: &str) -> Result<Vec<u8>, ExtractionError> {
    let compressed = STANDARD
        .decode(raw_base64.trim())
        .map_err(|e| ExtractionError::DecompressionFailed(format!("invalid base64: {e}")))?;

    let mut decoder = MultiGzDecoder::new(compressed.as_slice());
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|e| ExtractionError::DecompressionFailed(e.to_string()))?;
    Ok(json)
}

/// Decodes a delivery into [`LogsData`].
///
/// Decompression errors are reported before any JSON parsing is attempted.
pub fn decode_payload(raw_base64: &str) -> Result<LogsData, ExtractionError> {
    let json = decompress(raw_base64)?;
    serde_json::from_slice(&json).map_err(|e| ExtractionError::InvalidPayload(e.to_string()))
}
