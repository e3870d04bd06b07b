//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use banter_observe::tracing_setup::{init_tracing, TracingOptions};
//!
//! init_tracing(&TracingOptions {
//!     default_filter: "info".to_string(),
//!     json: false,
//!     otel: false,
//! })
//! .unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry};

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// How the global subscriber should be assembled.
#[derive(Debug, Clone)]
pub struct TracingOptions {
    /// Filter directives used when `RUST_LOG` is unset.
    pub default_filter: String,
    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json: bool,
    /// Bridge spans to OpenTelemetry with a stdout exporter.
    pub otel: bool,
}

/// Default filter directives for the CLI verbosity flags.
pub fn verbosity_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "info,banter=debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// - Installs a `fmt` layer (plain text with span close timing, or JSON).
/// - When `otel` is set, additionally exports spans through OpenTelemetry to
///   stdout (local development; swap the exporter for OTLP in production).
/// - `RUST_LOG` takes precedence over `default_filter`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(options: &TracingOptions) -> Result<(), TryInitError> {
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if options.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed()
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.default_filter));

    let otel_layer = options.otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("banter");

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(otel_layer)
        .with(env_filter)
        .try_init()
}

/// Flush pending spans and shut down the OpenTelemetry tracer provider.
///
/// No-op when OTel was not enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_filter_levels() {
        assert_eq!(verbosity_filter(0, true), "error");
        assert_eq!(verbosity_filter(0, false), "info");
        assert_eq!(verbosity_filter(1, false), "info,banter=debug");
        assert_eq!(verbosity_filter(3, true), "trace");
    }

    #[test]
    fn verbosity_filters_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(verbosity_filter(verbose, false)).is_ok());
        }
    }
}
