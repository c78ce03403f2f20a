mod entry;
pub mod status;

pub use entry::{ROOT_PATH, router};
pub use status::{API_OK, StatusMessage};
