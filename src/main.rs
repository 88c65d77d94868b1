use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use atc_classifier::connector::api::{Container, ContainerConfig, Router};
use atc_classifier::domain::{DEFAULT_ENDPOINT_URL, DEFAULT_MODEL};
use atc_classifier::{ClassifierConfig, Commands, PolicyArg};

#[derive(Parser)]
#[command(name = "atc-classifier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Chat endpoint URL
    #[arg(long, global = true, env = "OLLAMA_URL", default_value = DEFAULT_ENDPOINT_URL)]
    url: String,

    /// Model identifier sent with every request
    #[arg(long, global = true, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// How a failed chat request is reported by `classify`
    #[arg(long, global = true, value_enum, default_value_t = PolicyArg::Structural)]
    success_policy: PolicyArg,

    /// Classification request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,

    /// Connection test timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    probe_timeout: u64,

    /// Answer with this reply text instead of calling the endpoint
    #[arg(long, global = true)]
    mock_reply: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let classifier = ClassifierConfig::new(cli.url, cli.model)
        .with_timeouts(
            Duration::from_secs(cli.timeout),
            Duration::from_secs(cli.probe_timeout),
        )
        .with_success_policy(cli.success_policy.into());

    let container = Container::new(ContainerConfig {
        classifier,
        mock_reply: cli.mock_reply,
    });

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{output}");

    Ok(())
}
