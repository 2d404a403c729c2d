//! Builds an iCalendar feed of upcoming Larkhall Athletic fixtures from the
//! Football Web Pages API.

pub mod api;
pub mod classify;
pub mod club;
pub mod config;
pub mod dates;
pub mod error;
pub mod ical;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod probe;
pub mod validate;

pub use error::{Error, Result};

/// Install the stderr log subscriber shared by the binaries. `RUST_LOG`
/// overrides the default `info` level.
pub fn init_tracing() {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
