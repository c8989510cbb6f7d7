use super::Config;
use crate::error::PdfPullError;
use config::Config as ConfigBuilder;
use std::path::Path;

pub const DOTENV_FILE: &str = ".env";

/// Loads configuration from an optional file, then a `.env` file in the
/// working directory, then the process environment (`BASE_URL`, `COOKIE`,
/// `OUTPUT_DIR`, ...). Later layers win.
pub fn load_config(config_path: Option<&str>) -> Result<Config, PdfPullError> {
    load_config_with_env(
        config_path,
        Path::new(DOTENV_FILE),
        config::Environment::default(),
    )
}

pub(crate) fn load_config_with_env(
    config_path: Option<&str>,
    dotenv_path: &Path,
    environment: config::Environment,
) -> Result<Config, PdfPullError> {
    let mut builder = ConfigBuilder::builder();
    if let Some(config_path) = config_path {
        builder = builder.add_source(config::File::with_name(config_path));
    }

    if let Some(dotenv) = read_dotenv(dotenv_path)? {
        tracing::debug!(path = %dotenv_path.display(), "Loaded environment file");
        builder = builder.add_source(config::Environment::default().source(Some(dotenv)));
    }

    let config_builder = builder.add_source(environment).build()?;

    let mut app_config: Config = config_builder.try_deserialize()?;
    app_config.base_url = app_config.base_url.trim().to_string();
    Ok(app_config)
}

/// Reads `KEY=value` pairs without touching the process environment.
/// A missing file is not an error.
fn read_dotenv(path: &Path) -> Result<Option<config::Map<String, String>>, PdfPullError> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let vars = entries.collect::<Result<config::Map<String, String>, _>>()?;
    Ok(Some(vars))
}
