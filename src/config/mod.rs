mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{Config, DEFAULT_LOG_PATH, HistoryConfig};
