pub mod cli;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod probe;
pub mod report;
pub mod target;
pub mod verification;

pub use config::Config;
pub use error::PdfPullError;
