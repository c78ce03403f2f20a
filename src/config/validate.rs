use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use super::AppConfig;

const ROUTE_PATTERN_CHARS: [char; 4] = ['{', '}', '*', ':'];

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    validate_base_path(&cfg.general.base_path, &mut errors);

    if let Err(err) = EnvFilter::try_new(&cfg.logging.rust_log) {
        errors.push(format!(
            "logging.rust_log ({:?}) is not a valid filter: {err}",
            cfg.logging.rust_log
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

fn validate_base_path(base_path: &str, errors: &mut Vec<String>) {
    if !base_path.starts_with('/') {
        errors.push(format!("general.base_path ({base_path:?}) must start with '/'"));
    }

    if base_path.len() > 1 && base_path.ends_with('/') {
        errors.push(format!(
            "general.base_path ({base_path:?}) must not end with '/'"
        ));
    }

    if base_path.contains(ROUTE_PATTERN_CHARS) {
        errors.push(format!(
            "general.base_path ({base_path:?}) must not contain route pattern characters"
        ));
    }

    if base_path.chars().any(char::is_whitespace) {
        errors.push(format!(
            "general.base_path ({base_path:?}) must not contain whitespace"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_base_path(base_path: &str) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.general.base_path = base_path.to_string();
        cfg
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn accepts_nested_base_path() {
        assert!(validate(&with_base_path("/api/v1")).is_ok());
    }

    #[test]
    fn rejects_relative_base_path() {
        let err = validate(&with_base_path("api")).unwrap_err().to_string();
        assert!(err.contains("must start with '/'"), "{err}");
    }

    #[test]
    fn rejects_trailing_slash() {
        let err = validate(&with_base_path("/api/")).unwrap_err().to_string();
        assert!(err.contains("must not end with '/'"), "{err}");
    }

    #[test]
    fn rejects_route_patterns() {
        for base_path in ["/{tenant}", "/api/*rest", "/:id"] {
            let err = validate(&with_base_path(base_path)).unwrap_err().to_string();
            assert!(err.contains("route pattern characters"), "{base_path}: {err}");
        }
    }

    #[test]
    fn rejects_malformed_log_filter() {
        let mut cfg = AppConfig::default();
        cfg.logging.rust_log = "info,tower_http=loud".to_string();

        let err = validate(&cfg).unwrap_err().to_string();
        assert!(err.contains("logging.rust_log"), "{err}");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = with_base_path("api/ ");
        cfg.general.host = "  ".to_string();

        let err = validate(&cfg).unwrap_err().to_string();
        assert!(err.contains("general.host must not be empty"));
        assert!(err.contains("must start with '/'"));
        assert!(err.contains("must not contain whitespace"));
    }
}
