use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "municipal_core=info";

/// Installs a fmt subscriber. `RUST_LOG` wins over `filter`; an unparsable
/// directive falls back to [`DEFAULT_FILTER`]. Returns `false` when a global
/// subscriber was already set, which leaves that one in place.
pub fn init_tracing(filter: Option<&str>) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_tracing(Some("municipal_core=debug"));
        assert!(!init_tracing(None));
    }

    #[test]
    fn test_bad_filter_does_not_panic() {
        init_tracing(Some("=[not a directive"));
    }
}
