use crate::error::PdfPullError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_OUTPUT_DIR: &str = "downloaded";
pub const DEFAULT_LOG_DIR: &str = ".";
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Unknown keys are ignored: the environment layer carries every process variable.
pub struct Config {
    /// Prefix every document URL is built from, e.g. `https://host/docs/file`.
    #[serde(default)]
    pub base_url: String,
    /// Raw `Cookie` header value sent with every request.
    #[serde(default)]
    pub cookie: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_download_timeout_secs() -> u64 {
    DEFAULT_DOWNLOAD_TIMEOUT_SECS
}

impl Config {
    pub fn new(base_url: impl Into<String>, cookie: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cookie,
            output_dir: default_output_dir(),
            log_dir: default_log_dir(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    /// Cookie value to send, if any. Blank values count as absent.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie
            .as_deref()
            .map(str::trim)
            .filter(|cookie| !cookie.is_empty())
    }

    pub fn validate(&self) -> Result<(), PdfPullError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(PdfPullError::ConfigurationMissing {
                details: "BASE_URL is not set. Export it, add it to .env or set base_url in the config file."
                    .to_string(),
            });
        }
        // Document URLs are built by appending to base_url verbatim.
        if base_url != self.base_url {
            return Err(PdfPullError::ConfigurationMissing {
                details: format!("BASE_URL {:?} has surrounding whitespace", self.base_url),
            });
        }

        let parsed = Url::parse(base_url).map_err(|e| PdfPullError::ConfigurationMissing {
            details: format!("BASE_URL {base_url:?} is not a valid URL: {e}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PdfPullError::ConfigurationMissing {
                details: format!(
                    "BASE_URL must use http or https, got scheme {:?}",
                    parsed.scheme()
                ),
            });
        }

        for (name, value) in [
            ("probe_timeout_secs", self.probe_timeout_secs),
            ("download_timeout_secs", self.download_timeout_secs),
        ] {
            if value == 0 {
                return Err(PdfPullError::ConfigurationMissing {
                    details: format!("{name} must be greater than 0."),
                });
            }
        }

        Ok(())
    }
}
