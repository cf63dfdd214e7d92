//! Tracing subscriber setup for the binaries.
//!
//! Logs go to stderr so stdout stays machine-readable (NDJSON, JSON, HTML).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WINELIST_LOG";

/// Default directive for a `-v`/`-q` balance (`verbose - quiet`).
pub fn default_directive(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `WINELIST_LOG` wins over the verbosity flags.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: i8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(-2), "error");
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(5), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(1);
    }
}
