//! `tracing` events reach the host console through `ConsoleLayer`.

use consolebridge_envelope::Channel;
use consolebridge_host::test_support::CaptureConsole;
use consolebridge_host::{ConsoleDispatcher, register_console_dispatcher};
use consolebridge_logger::{ConsoleLayer, ConsoleLoggerProvider, Severity};
use consolebridge_transport::{HostContext, HostContextConfig};
use pretty_assertions::assert_eq;
use tracing_subscriber::prelude::*;

async fn capture<F: FnOnce()>(min_level: Severity, emit: F) -> Vec<(Channel, String)> {
    let context = HostContext::new(HostContextConfig::default());
    let console = CaptureConsole::new();
    register_console_dispatcher(context.registry(), ConsoleDispatcher::new(console.clone()));
    context.start().unwrap();

    let provider = ConsoleLoggerProvider::new(context.boundary()).with_min_level(min_level);
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(provider));
    tracing::subscriber::with_default(subscriber, emit);

    context.shutdown().await;
    console.lines()
}

#[tokio::test]
async fn test_levels_pick_channels() {
    let lines = capture(Severity::Trace, || {
        tracing::trace!(target: "app", "entering loop");
        tracing::debug!(target: "app", "cache warm");
        tracing::info!(target: "app", "ready");
        tracing::warn!(target: "app", "slow start");
        tracing::error!(target: "app", "crashed");
    })
    .await;

    assert_eq!(
        lines,
        vec![
            (Channel::Trace, "entering loop".to_string()),
            (Channel::Debug, "cache warm".to_string()),
            (Channel::Log, "ready".to_string()),
            (Channel::Warn, "slow start".to_string()),
            (Channel::Error, "crashed".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_min_level_filters_events() {
    let lines = capture(Severity::Warning, || {
        tracing::info!(target: "app", "ignored");
        tracing::warn!(target: "app", "kept");
    })
    .await;

    assert_eq!(lines, vec![(Channel::Warn, "kept".to_string())]);
}

#[tokio::test]
async fn test_fields_and_exception() {
    let lines = capture(Severity::Information, || {
        tracing::error!(
            target: "app",
            attempt = 3,
            exception = "IOException: disk full",
            "save failed"
        );
    })
    .await;

    assert_eq!(
        lines,
        vec![
            (Channel::Error, "save failed attempt=3".to_string()),
            (Channel::Error, "Exception: IOException: disk full".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_error_values_render_their_sources() {
    #[derive(Debug, thiserror::Error)]
    #[error("could not load settings")]
    struct LoadError(#[source] std::io::Error);

    let error = LoadError(std::io::Error::other("permission denied"));

    let lines = capture(Severity::Information, || {
        tracing::warn!(
            target: "app",
            exception = &error as &(dyn std::error::Error + 'static),
            "using defaults"
        );
    })
    .await;

    assert_eq!(
        lines,
        vec![
            (Channel::Warn, "using defaults".to_string()),
            (
                Channel::Warn,
                "Exception: could not load settings\nCaused by: permission denied".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn test_span_names_prefix_message() {
    let lines = capture(Severity::Information, || {
        let outer = tracing::info_span!(target: "app", "request");
        let _outer = outer.enter();
        let inner = tracing::info_span!(target: "app", "render");
        let _inner = inner.enter();

        tracing::info!(target: "app", "done");
    })
    .await;

    assert_eq!(lines, vec![(Channel::Log, "request::render: done".to_string())]);
}

#[tokio::test]
async fn test_own_crates_are_not_forwarded() {
    let lines = capture(Severity::Trace, || {
        tracing::error!(target: "consolebridge_transport::boundary", "internal");
        tracing::info!(target: "app", "external");
    })
    .await;

    assert_eq!(lines, vec![(Channel::Log, "external".to_string())]);
}
