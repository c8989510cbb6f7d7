use clap::{ArgAction, Parser};
use tracing::Level;

/// Raw command-line input, before config loading and validation.
#[derive(Debug, Clone, Default)]
pub struct FetchCommand {
    pub config_path: Option<String>,
    pub range: Option<String>,
    pub prefix: Option<String>,
    pub output_dir: Option<String>,
    pub log_dir: Option<String>,
    pub skip_probe: bool,
    pub verify: bool,
}

pub struct Args {
    pub command: FetchCommand,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "pdfpull",
    version,
    about = "Sequentially download numbered PDF documents from an authenticated HTTP endpoint"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file; BASE_URL and COOKIE from the environment take precedence"
    )]
    config: Option<String>,

    #[arg(
        short = 'r',
        long = "range",
        value_name = "START,STOP",
        help = "Inclusive range of document indices, e.g. 1,12 (prompted for when omitted)"
    )]
    range: Option<String>,

    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Prefix for the local file names (prompted for when omitted)"
    )]
    prefix: Option<String>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Overrides the directory downloaded documents are stored in"
    )]
    output_dir: Option<String>,

    #[arg(
        long = "log-dir",
        value_name = "DIR",
        help = "Overrides the directory the run summary log is written to"
    )]
    log_dir: Option<String>,

    #[arg(long = "skip-probe", help = "Start downloading without probing the first document")]
    skip_probe: bool,

    #[arg(
        long = "verify",
        help = "Re-hash stored documents after the batch and compare with the recorded digests"
    )]
    verify: bool,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper_util=warn".parse().expect("static directive")),
        )
        .init();

    let command = FetchCommand {
        config_path: cli.config,
        range: cli.range,
        prefix: cli.prefix,
        output_dir: cli.output_dir,
        log_dir: cli.log_dir,
        skip_probe: cli.skip_probe,
        verify: cli.verify,
    };

    Args { command, log_level }
}
