use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repo_anchor::cli::{env_fallbacks, Cli};
use repo_anchor::config::build_request;
use repo_anchor::{run_snapshot, AnchorClient, OutputSink};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repo_anchor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("repo-anchor v0.1.0 starting");

    let cli = Cli::parse();

    let request = match build_request(&cli.raw_inputs(), &env_fallbacks()) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        github_id = request.github_id,
        branch = %request.branch,
        endpoint = %request.endpoint,
        confirmations = request.confirmations,
        poll_interval_secs = request.poll_interval_secs,
        max_wait_secs = request.max_wait_secs,
        "configuration validated"
    );

    let client = match AnchorClient::new(&cli.token) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let outputs = OutputSink::from_env();

    match run_snapshot(&client, &request, &outputs).await {
        Ok(snapshot) => {
            tracing::info!(
                tx_hash = %snapshot.tx_hash,
                confirmations = ?snapshot.confirmations,
                "snapshot anchored"
            );
        }
        Err(e) => {
            tracing::error!("snapshot run failed: {e}");
            std::process::exit(1);
        }
    }
}
