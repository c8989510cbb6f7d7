use crate::download::RunSummary;
use crate::error::PdfPullError;
use crate::target::pad_index;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const REPORT_HEADER: &str = "PDF download summary";
pub const REPORT_FOOTER: &str = "End of summary";
const SEPARATOR: &str = "----------------------------------------";

/// First of `out.log`, `out.1.log`, `out.2.log`, ... that does not exist yet.
pub fn next_log_path(log_dir: &Path) -> PathBuf {
    let first = log_dir.join("out.log");
    if !first.exists() {
        return first;
    }

    (1u32..)
        .map(|n| log_dir.join(format!("out.{n}.log")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

/// Renders the human-readable summary. Failed documents are listed with
/// their error alongside the successful ones.
pub fn render_report(summary: &RunSummary, prefix: &str) -> String {
    let mut lines = vec![
        REPORT_HEADER.to_string(),
        format!("Successful downloads: {}", summary.success_count),
    ];
    if summary.failure_count > 0 {
        lines.push(format!("Failed downloads: {}", summary.failure_count));
    }
    lines.push(SEPARATOR.to_string());

    for outcome in &summary.outcomes {
        let name = format!("{prefix}{}", pad_index(outcome.index));
        let line = match outcome.content_hash.as_deref().filter(|_| outcome.success) {
            Some(digest) => format!(
                "[{}] {name} downloaded successfully. SHA256: {digest}",
                outcome.index
            ),
            None => format!("[{}] {name} failed. Error: {}", outcome.index, outcome.message),
        };
        lines.push(line);
    }

    lines.push(REPORT_FOOTER.to_string());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Writes the summary to a fresh log file in `log_dir` and returns its path.
pub fn write_report(
    log_dir: &Path,
    summary: &RunSummary,
    prefix: &str,
) -> Result<PathBuf, PdfPullError> {
    std::fs::create_dir_all(log_dir).map_err(|e| PdfPullError::ReportWrite {
        path: log_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let contents = render_report(summary, prefix);
    let path = next_log_path(log_dir);

    // create_new refuses to clobber a log that appeared after the probe above.
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| PdfPullError::ReportWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| PdfPullError::ReportWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), "Run summary written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::ItemOutcome;

    fn sample_summary() -> RunSummary {
        let mut summary = RunSummary::default();
        summary.record(ItemOutcome::succeeded(1, "aaa", "ok"));
        summary.record(ItemOutcome::failed(2, "server responded with 404 Not Found"));
        summary.record(ItemOutcome::succeeded(3, "ccc", "ok"));
        summary
    }

    #[test]
    fn test_render_report_layout() {
        let report = render_report(&sample_summary(), "doc");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "PDF download summary",
                "Successful downloads: 2",
                "Failed downloads: 1",
                SEPARATOR,
                "[1] doc01 downloaded successfully. SHA256: aaa",
                "[2] doc02 failed. Error: server responded with 404 Not Found",
                "[3] doc03 downloaded successfully. SHA256: ccc",
                "End of summary",
            ]
        );
    }

    #[test]
    fn test_render_report_omits_zero_failures() {
        let mut summary = RunSummary::default();
        summary.record(ItemOutcome::succeeded(104, "ddd", "ok"));

        let report = render_report(&summary, "");
        assert!(!report.contains("Failed downloads"));
        assert!(report.contains("[104] 104 downloaded successfully. SHA256: ddd"));
    }

    #[test]
    fn test_next_log_path_skips_existing_logs() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(next_log_path(dir.path()), dir.path().join("out.log"));

        std::fs::write(dir.path().join("out.log"), "").unwrap();
        assert_eq!(next_log_path(dir.path()), dir.path().join("out.1.log"));

        std::fs::write(dir.path().join("out.1.log"), "").unwrap();
        assert_eq!(next_log_path(dir.path()), dir.path().join("out.2.log"));
    }

    #[test]
    fn test_write_report_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let summary = sample_summary();

        let first = write_report(dir.path(), &summary, "doc").unwrap();
        let first_contents = std::fs::read_to_string(&first).unwrap();
        let second = write_report(dir.path(), &RunSummary::default(), "doc").unwrap();

        assert_eq!(first, dir.path().join("out.log"));
        assert_eq!(second, dir.path().join("out.1.log"));
        assert_eq!(std::fs::read_to_string(&first).unwrap(), first_contents);
    }
}
