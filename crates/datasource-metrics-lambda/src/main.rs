// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use datasource_metrics::{
    cloudwatch::CloudWatchSink,
    config::ExtractorConfig,
    constants::DEFAULT_LOG_LEVEL,
    extractor::LogEventMetricExtractor,
    payload::LogsEvent,
};

const QUIET_TARGETS: &str = "h2=off,hyper=off,rustls=off,aws_smithy_runtime=off";

fn log_filter(log_level: &str) -> String {
    format!("{QUIET_TARGETS},{log_level}")
}

#[tokio::main]
pub async fn main() -> Result<(), Error> {
    // Config errors are logged, so the subscriber is installed first.
    let config = ExtractorConfig::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.as_str())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_new(log_filter(log_level))?)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Logging subsystem enabled");

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Error creating config on datasource metrics startup: {e}");
            return Err(e.into());
        }
    };

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let sink = Arc::new(CloudWatchSink::new(aws_sdk_cloudwatch::Client::new(
        &aws_config,
    )));
    let extractor = LogEventMetricExtractor::new(&config, sink);

    info!(
        "Publishing datasource completion times to namespace {} ({:?} submission)",
        extractor.namespace(),
        config.submission_mode
    );

    let extractor = &extractor;
    run(service_fn(move |event: LambdaEvent<LogsEvent>| async move {
        handle_logs(extractor, event).await
    }))
    .await
}

async fn handle_logs(
    extractor: &LogEventMetricExtractor,
    event: LambdaEvent<LogsEvent>,
) -> Result<(), Error> {
    debug!("Received log delivery, request id {}", event.context.request_id);

    match extractor.process_batch(&event.payload.aws_logs.data).await {
        Ok(report) => {
            debug!("Processed log delivery: {report:?}");
            Ok(())
        }
        Err(e) => {
            error!("Failed to process log delivery: {e}");
            Err(e.into())
        }
    }
}
