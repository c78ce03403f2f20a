pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
