use super::types::{ItemOutcome, RunSummary};
use crate::config::Config;
use crate::error::PdfPullError;
use crate::target::{BatchRequest, DownloadTarget};
use crate::verification::{CHUNK_SIZE, ContentDigestHasher};
use eyre::{Result, WrapErr, eyre};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// Downloads every index of `request` one after another.
///
/// Per-document failures are recorded in the returned summary and never stop
/// the batch; only failing to create the output directory is fatal.
pub async fn fetch_batch(
    client: &reqwest::Client,
    config: &Config,
    request: &BatchRequest,
) -> Result<RunSummary, PdfPullError> {
    let output_dir = config.output_dir.as_path();
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| PdfPullError::OutputDirectoryCreation {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

    info!(
        start = request.start(),
        stop = request.stop(),
        output = %output_dir.display(),
        "Downloading {} documents",
        request.target_count()
    );

    let timeout = config.download_timeout();
    let mut summary = RunSummary::default();

    for target in request.targets(&config.base_url, output_dir) {
        let outcome = match download_target(client, &target, timeout).await {
            Ok(digest) => {
                info!(
                    index = target.index,
                    sha256 = %digest,
                    "{} downloaded successfully",
                    target.local_path.display()
                );
                ItemOutcome::succeeded(
                    target.index,
                    digest,
                    format!("{} downloaded successfully", target.local_path.display()),
                )
            }
            Err(err) => {
                let err = PdfPullError::ItemDownloadFailed {
                    index: target.index,
                    url: target.url.clone(),
                    reason: format!("{err:#}"),
                };
                warn!("{err}");
                ItemOutcome::failed(target.index, err.to_string())
            }
        };
        summary.record(outcome);
    }

    info!(
        succeeded = summary.success_count,
        failed = summary.failure_count,
        "Batch finished"
    );
    Ok(summary)
}

/// Streams one document to disk, returning the hex SHA-256 of its body.
async fn download_target(
    client: &reqwest::Client,
    target: &DownloadTarget,
    timeout: Duration,
) -> Result<String> {
    tracing::debug!(url = %target.url, output = %target.local_path.display(), "Requesting");

    let mut response = client
        .get(&target.url)
        .timeout(timeout)
        .send()
        .await
        .wrap_err_with(|| format!("GET {} failed", target.url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(eyre!("server responded with {status}"));
    }

    let file = tokio::fs::File::create(&target.local_path)
        .await
        .wrap_err_with(|| format!("Failed to create output file: {}", target.local_path.display()))?;
    let mut writer = tokio::io::BufWriter::with_capacity(CHUNK_SIZE, file);
    let mut hasher = ContentDigestHasher::new();

    while let Some(bytes) = response
        .chunk()
        .await
        .wrap_err_with(|| format!("Failed to read body of {}", target.url))?
    {
        for chunk in bytes.chunks(CHUNK_SIZE) {
            hasher.update(chunk);
            writer
                .write_all(chunk)
                .await
                .wrap_err_with(|| format!("Failed to write to {}", target.local_path.display()))?;
        }
    }

    writer
        .flush()
        .await
        .wrap_err_with(|| format!("Failed to flush {}", target.local_path.display()))?;

    Ok(hasher.finalize_hex())
}
