use anyhow::Context;
use restfetch::RestContext;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

async fn run(id: u64) -> anyhow::Result<()> {
    let ctx = RestContext::new().context("failed to create HTTP client")?;
    let user = ctx
        .get_user(id, None)
        .await
        .with_context(|| format!("failed to fetch user {}", id))?;

    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let id = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        None => 1,
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            tracing::error!(error = %e, "user id must be a positive integer");
            return ExitCode::FAILURE;
        }
    };

    match run(id).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
