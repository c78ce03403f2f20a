use axum::Router;

use crate::{config::AppConfig, server::app};

/// Application with default config, mounted at `base_path`.
pub fn test_app(base_path: &str) -> Router {
    let mut cfg = AppConfig::default();
    cfg.general.base_path = base_path.to_string();
    app(&cfg)
}
