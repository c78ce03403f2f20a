use axum::Router;

use super::status;

pub const ROOT_PATH: &str = "/";

/// Mounts the status router at `base_path`. axum refuses to nest at the root,
/// so `/` is served as-is.
pub fn router(base_path: &str) -> Router {
    if base_path == ROOT_PATH {
        status::router()
    } else {
        Router::new().nest(base_path, status::router())
    }
}
