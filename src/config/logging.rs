use tracing_subscriber::EnvFilter;

/// `RUST_LOG`이 없을 때 쓰는 기본 필터
pub const DEFAULT_LOG_DIRECTIVE: &str = "kafka_wire_core=info";

/// Builds the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVE`]
/// when it is unset, blank or unparseable.
pub fn log_filter_from_env() -> EnvFilter {
    log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_DIRECTIVE);
        assert_eq!(log_filter(Some("  ")).to_string(), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn test_rust_log_overrides_default_level() {
        let filter = log_filter(Some("kafka_wire_core=debug"));
        assert_eq!(filter.to_string(), "kafka_wire_core=debug");

        let filter = log_filter(Some("kafka_wire_core=trace"));
        assert_eq!(filter.to_string(), "kafka_wire_core=trace");
    }

    #[test]
    fn test_unparseable_directive_falls_back_to_default() {
        assert_eq!(
            log_filter(Some("kafka_wire_core=loud")).to_string(),
            DEFAULT_LOG_DIRECTIVE
        );
    }
}
