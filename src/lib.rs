pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod test_helpers;
