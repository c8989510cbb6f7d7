mod writer;

pub use writer::{REPORT_FOOTER, REPORT_HEADER, next_log_path, render_report, write_report};
