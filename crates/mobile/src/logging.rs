use std::{panic::PanicHookInfo, sync::Once};

use tracing::Metadata;
use tracing_subscriber::{
    filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
};

fn is_fairway_event(metadata: &Metadata<'_>) -> bool {
    metadata
        .module_path()
        .unwrap_or_default()
        .starts_with("fairway")
}

pub(crate) fn setup_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        install_subscriber();
        std::panic::set_hook(Box::new(panic_hook));
    })
}

#[cfg(target_os = "android")]
fn install_subscriber() {
    use tracing_logcat::{LogcatMakeWriter, LogcatTag};

    let tag = LogcatTag::Fixed("Fairway-Rust".to_owned());
    let writer = match LogcatMakeWriter::new(tag) {
        Ok(writer) => writer,
        Err(error) => {
            eprintln!("failed to initialize logcat writer: {error}");
            return;
        }
    };

    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().with_level(false).without_time())
        .with_writer(writer)
        .with_ansi(false);

    // another subscriber may already be installed by the host
    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(FilterFn::new(is_fairway_event))
        .try_init();
}

#[cfg(not(target_os = "android"))]
fn install_subscriber() {
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().without_time())
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(FilterFn::new(is_fairway_event))
        .try_init();
}

fn panic_hook(info: &PanicHookInfo) {
    tracing::error!("{info}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_is_idempotent() {
        setup_logging();
        setup_logging();
        tracing::info!("logging ready");
    }
}
