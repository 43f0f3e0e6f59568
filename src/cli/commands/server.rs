use clap::Subcommand;
use reqwest::StatusCode;
use serde_json::json;
use url::Url;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::DEFAULT_LEGACY_VERIFY_PATH;
use crate::handlers::{DeprecationResponse, NewEndpoints};

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Discover the live auth endpoints through the retired verification route")]
    Discover {
        #[arg(help = "Server base URL, e.g. http://localhost:3000")]
        base_url: String,
        #[arg(long, default_value = DEFAULT_LEGACY_VERIFY_PATH, help = "Retired route to query")]
        path: String,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Discover { base_url, path } => {
            let client = reqwest::Client::new();
            let endpoints = discover_endpoints(&client, &base_url, &path).await?;

            match output_format {
                OutputFormat::Json => output_success(
                    &output_format,
                    "Discovered auth endpoints",
                    Some(json!({ "newEndpoints": endpoints })),
                ),
                OutputFormat::Text => {
                    println!("Login:  {}", endpoints.login);
                    println!("Verify: {}", endpoints.verify);
                    Ok(())
                }
            }
        }
    }
}

/// GET the retired route and read the replacement endpoints from its 410 body.
pub async fn discover_endpoints(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
) -> anyhow::Result<NewEndpoints> {
    let url = Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map_err(|e| anyhow::anyhow!("invalid server URL {}{}: {}", base_url, path, e))?;

    tracing::debug!("Querying retired route {}", url);
    let res = client.get(url.clone()).send().await?;

    if res.status() != StatusCode::GONE {
        anyhow::bail!("expected 410 Gone from {}, got {}", url, res.status());
    }

    let body: DeprecationResponse = res.json().await?;
    Ok(body.new_endpoints)
}
