mod args;
mod fetch;
mod params;
mod prompt;
mod resolved_command;

pub use args::{Args, FetchCommand, parse_args};
pub use fetch::{RunOutcome, run_fetch};
pub use params::FetchParams;
pub use prompt::prompt_line;
pub use resolved_command::{resolve_command, resolve_with_config};
