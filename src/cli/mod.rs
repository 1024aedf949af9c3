//! Command-line harness for the oracle

pub mod context;
mod query;
mod resolve;
pub mod style;

pub use query::run_query;
pub use resolve::{ResolveOptions, run_resolve};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug, else warn.
/// Logs never go to stdout, which carries only the payload.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
