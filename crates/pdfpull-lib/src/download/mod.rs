mod download;
mod types;

pub use download::fetch_batch;
pub use types::{ItemOutcome, RunSummary};
