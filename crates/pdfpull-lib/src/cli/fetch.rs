use crate::cli::FetchParams;
use crate::client::build_http_client;
use crate::download::{RunSummary, fetch_batch};
use crate::error::PdfPullError;
use crate::probe::probe_connection;
use crate::report::write_report;
use crate::target::DownloadTarget;
use crate::verification::verify_outcomes;
use std::path::PathBuf;

#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub report_path: PathBuf,
    /// Number of documents re-hashed when verification was requested.
    pub verified: Option<usize>,
}

/// Probe, then download the whole batch, then persist the run summary.
pub async fn run_fetch(params: FetchParams) -> Result<RunOutcome, PdfPullError> {
    let FetchParams {
        app_config,
        request,
        skip_probe,
        verify,
    } = params;

    let client = build_http_client(&app_config)?;

    if skip_probe {
        tracing::warn!("Skipping connection probe");
    } else {
        let first = DownloadTarget::new(
            &app_config.base_url,
            request.prefix(),
            &app_config.output_dir,
            request.start(),
        );
        probe_connection(&client, &first.url, app_config.probe_timeout()).await?;
    }

    let summary = fetch_batch(&client, &app_config, &request).await?;
    if summary.failure_count > 0 {
        tracing::warn!(
            "{} of {} documents failed to download",
            summary.failure_count,
            summary.total()
        );
    }

    let report_path = write_report(&app_config.log_dir, &summary, request.prefix())?;

    let verified = if verify {
        tracing::info!("Verifying stored documents...");
        let verified = verify_outcomes(&app_config.output_dir, request.prefix(), &summary)?;
        tracing::info!("Verified {} documents", verified);
        Some(verified)
    } else {
        None
    };

    Ok(RunOutcome {
        summary,
        report_path,
        verified,
    })
}
