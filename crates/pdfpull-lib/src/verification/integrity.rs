use super::content_digest_hasher::sha256_file;
use crate::download::RunSummary;
use crate::error::PdfPullError;
use crate::target::local_file_name;
use std::path::Path;

/// Re-hashes every stored document and compares it with the recorded digest.
pub fn verify_outcomes(
    output_dir: &Path,
    prefix: &str,
    summary: &RunSummary,
) -> Result<usize, PdfPullError> {
    let mut verified = 0;

    for outcome in summary.successes() {
        let Some(expected) = outcome.content_hash.as_deref() else {
            continue;
        };
        let path = output_dir.join(local_file_name(prefix, outcome.index));
        let actual = sha256_file(&path)?;

        if actual != expected {
            return Err(PdfPullError::IntegrityMismatch {
                path,
                expected: expected.to_string(),
                actual,
            });
        }
        tracing::debug!(path = %path.display(), digest = %actual, "Verified");
        verified += 1;
    }

    Ok(verified)
}
