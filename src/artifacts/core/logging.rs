//! Logging setup for the command line
//!
//! Events go to stderr so that diff output on stdout stays machine readable.
//! `RUST_LOG` overrides the profile's default filter.

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Warnings only
    Quiet,
    /// Pipeline progress at debug level
    Verbose,
    /// Every scan step of the balancer and each projected script
    Trace,
}

impl Profile {
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Profile::Quiet,
            1 => Profile::Verbose,
            _ => Profile::Trace,
        }
    }

    fn default_filter(&self) -> &'static str {
        match self {
            Profile::Quiet => "scratch_diff=warn",
            Profile::Verbose => "scratch_diff=debug",
            Profile::Trace => "scratch_diff=trace",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish()
            .try_init();

        if let Err(err) = result {
            eprintln!("logging already initialised: {err}");
        }
    });
}
