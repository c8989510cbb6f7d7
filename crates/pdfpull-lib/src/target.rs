use crate::error::PdfPullError;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Zero-pads a document index to a minimum width of two digits.
pub fn pad_index(index: u32) -> String {
    format!("{index:02}")
}

/// One remote document and the local file it is stored in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTarget {
    pub index: u32,
    pub url: String,
    pub local_path: PathBuf,
}

impl DownloadTarget {
    pub fn new(base_url: &str, prefix: &str, output_dir: &Path, index: u32) -> Self {
        let padded = pad_index(index);
        Self {
            index,
            url: format!("{base_url}{padded}.pdf"),
            local_path: output_dir.join(local_file_name(prefix, index)),
        }
    }
}

/// `{prefix}{padded}.pdf`
pub fn local_file_name(prefix: &str, index: u32) -> String {
    format!("{prefix}{}.pdf", pad_index(index))
}

/// Inclusive index range plus the naming prefix for a single run.
/// Only constructible through [`BatchRequest::new`], so `1 <= start <= stop`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRequest {
    start: u32,
    stop: u32,
    prefix: String,
}

impl BatchRequest {
    pub fn new(start: u32, stop: u32, prefix: impl Into<String>) -> Result<Self, PdfPullError> {
        validate_range(start, stop)?;
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self {
            start,
            stop,
            prefix,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn stop(&self) -> u32 {
        self.stop
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn indices(&self) -> RangeInclusive<u32> {
        self.start..=self.stop
    }

    pub fn target_count(&self) -> usize {
        (self.stop - self.start) as usize + 1
    }

    pub fn targets<'a>(
        &'a self,
        base_url: &'a str,
        output_dir: &'a Path,
    ) -> impl Iterator<Item = DownloadTarget> + 'a {
        self.indices()
            .map(move |index| DownloadTarget::new(base_url, &self.prefix, output_dir, index))
    }
}

/// Parses `"START,STOP"` into an inclusive index pair.
pub fn parse_range(input: &str) -> Result<(u32, u32), PdfPullError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let &[start, stop] = parts.as_slice() else {
        return Err(PdfPullError::InvalidInput {
            details: format!(
                "expected two comma-separated integers (START,STOP), got {input:?}"
            ),
        });
    };

    let parse = |part: &str, name: &str| {
        part.parse::<u32>().map_err(|e| PdfPullError::InvalidInput {
            details: format!("{name} index {part:?} is not a non-negative integer: {e}"),
        })
    };
    let start = parse(start, "start")?;
    let stop = parse(stop, "stop")?;

    validate_range(start, stop)?;
    Ok((start, stop))
}

pub fn validate_range(start: u32, stop: u32) -> Result<(), PdfPullError> {
    if start < 1 {
        return Err(PdfPullError::InvalidInput {
            details: "start index must be at least 1".to_string(),
        });
    }
    if start > stop {
        return Err(PdfPullError::InvalidInput {
            details: format!("start index {start} is greater than stop index {stop}"),
        });
    }
    Ok(())
}

/// The prefix ends up in a file name, so it may not escape the output directory.
pub fn validate_prefix(prefix: &str) -> Result<(), PdfPullError> {
    if prefix.contains(['/', '\\', '\0']) {
        return Err(PdfPullError::InvalidInput {
            details: format!("prefix {prefix:?} must not contain path separators"),
        });
    }
    Ok(())
}
