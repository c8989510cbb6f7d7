mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    Config, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_LOG_DIR, DEFAULT_OUTPUT_DIR,
    DEFAULT_PROBE_TIMEOUT_SECS,
};
