use crate::cli::args::FetchCommand;
use crate::cli::params::FetchParams;
use crate::cli::prompt::{PREFIX_PROMPT, RANGE_PROMPT, prompt_line};
use crate::config::{Config, load_config};
use crate::error::PdfPullError;
use crate::target::{BatchRequest, parse_range};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Turns command-line input into validated run parameters, prompting on the
/// terminal for a missing range or prefix. Performs no network I/O.
pub fn resolve_command(command: FetchCommand) -> Result<FetchParams, PdfPullError> {
    let app_config = load_config(command.config_path.as_deref())?;
    let stdin = std::io::stdin();
    resolve_with_config(
        command,
        app_config,
        &mut stdin.lock(),
        &mut std::io::stdout(),
    )
}

pub fn resolve_with_config(
    command: FetchCommand,
    mut app_config: Config,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<FetchParams, PdfPullError> {
    if let Some(output_dir) = command.output_dir {
        app_config.output_dir = PathBuf::from(output_dir);
    }
    if let Some(log_dir) = command.log_dir {
        app_config.log_dir = PathBuf::from(log_dir);
    }
    app_config.validate()?;

    let range = match command.range {
        Some(range) => range,
        None => prompt_line(input, output, RANGE_PROMPT)?,
    };
    let (start, stop) = parse_range(&range)?;

    let prefix = match command.prefix {
        Some(prefix) => prefix,
        None => prompt_line(input, output, PREFIX_PROMPT)?,
    };
    let request = BatchRequest::new(start, stop, prefix)?;

    Ok(FetchParams {
        app_config,
        request,
        skip_probe: command.skip_probe,
        verify: command.verify,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("https://example.com/docs/lecture", None)
    }

    #[test]
    fn test_arguments_take_precedence_over_prompts() {
        let command = FetchCommand {
            range: Some("2,4".to_string()),
            prefix: Some("doc".to_string()),
            output_dir: Some("pdfs".to_string()),
            ..FetchCommand::default()
        };
        let mut output = Vec::new();

        let params =
            resolve_with_config(command, config(), &mut "".as_bytes(), &mut output).unwrap();

        assert_eq!(params.request, BatchRequest::new(2, 4, "doc").unwrap());
        assert_eq!(params.app_config.output_dir, PathBuf::from("pdfs"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompts_for_missing_values() {
        let mut input = "1, 3\nlecture\n".as_bytes();
        let mut output = Vec::new();

        let params =
            resolve_with_config(FetchCommand::default(), config(), &mut input, &mut output)
                .unwrap();

        assert_eq!(params.request.start(), 1);
        assert_eq!(params.request.stop(), 3);
        assert_eq!(params.request.prefix(), "lecture");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{RANGE_PROMPT}{PREFIX_PROMPT}")
        );
    }

    #[test]
    fn test_malformed_range_is_rejected() {
        for range in ["abc,3", "7"] {
            let command = FetchCommand {
                range: Some(range.to_string()),
                prefix: Some("doc".to_string()),
                ..FetchCommand::default()
            };
            assert!(matches!(
                resolve_with_config(command, config(), &mut "".as_bytes(), &mut Vec::new()),
                Err(PdfPullError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_missing_base_url_fails_before_prompting() {
        let mut output = Vec::new();
        let result = resolve_with_config(
            FetchCommand::default(),
            Config::new("", None),
            &mut "1,2\ndoc\n".as_bytes(),
            &mut output,
        );

        assert!(matches!(
            result,
            Err(PdfPullError::ConfigurationMissing { .. })
        ));
        assert!(output.is_empty());
    }
}
