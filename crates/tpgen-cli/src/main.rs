use clap::Parser;
use tpgen_config::TpgenConfig;

mod cli;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tpgen error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let coords = cli.coordinates()?;
    let config = TpgenConfig::load_with_dotenv()?;

    let token = match cli.token.as_deref() {
        Some("") => anyhow::bail!("CodeSandbox token must not be empty"),
        Some(token) => token.to_string(),
        None => config.require_token()?.to_string(),
    };

    let max_results = cli.max_results.or_else(|| config.general.cap());

    let links = tpgen_report::list_matching(&coords, &token, max_results).await?;

    if cli.json {
        output::render_json(&links)?;
    } else {
        output::render_human(&links);
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TPGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
