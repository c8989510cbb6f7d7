use color_eyre::eyre::Result;
use pdfpull_lib::cli::{parse_args, resolve_command, run_fetch};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args.command)?;
    let outcome = run_fetch(params).await?;

    tracing::info!(
        succeeded = outcome.summary.success_count,
        failed = outcome.summary.failure_count,
        "Run summary saved to {}",
        outcome.report_path.display()
    );

    Ok(())
}
