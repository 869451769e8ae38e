use color_eyre::Result;
use tracing_subscriber::{layer::Layered, EnvFilter, Registry};
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

type StderrWriter = fn() -> std::io::Stderr;

pub type CompactRegistry = Layered<
    EnvFilter,
    Layered<
        tracing_subscriber::fmt::Layer<
            Registry,
            tracing_subscriber::fmt::format::DefaultFields,
            tracing_subscriber::fmt::format::Format<tracing_subscriber::fmt::format::Compact>,
            StderrWriter,
        >,
        Registry,
    >,
>;

// stdout carries command output (and `--json`), logs go to stderr
fn registry() -> CompactRegistry {
    Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr as StderrWriter),
        )
        .with(EnvFilter::from_default_env())
}

pub fn init() -> Result<()> {
    registry().try_init()?;

    Ok(())
}
