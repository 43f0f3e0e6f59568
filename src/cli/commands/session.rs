use clap::Subcommand;
use serde_json::json;

use crate::auth::{Role, ROLE_KEY};
use crate::cli::config::open_store;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::storage::FileStore;

#[derive(Subcommand)]
pub enum SessionCommands {
    #[command(about = "Store a raw role value (stored verbatim, resolved on read)")]
    SetRole {
        #[arg(help = "Raw role string, e.g. admin or super_admin")]
        raw: String,
    },

    #[command(about = "Remove the stored role")]
    Clear,
}

pub async fn handle(cmd: SessionCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let store = open_store()?;
    run_with(cmd, &output_format, &store)
}

pub fn run_with(cmd: SessionCommands, output_format: &OutputFormat, store: &FileStore) -> anyhow::Result<()> {
    match cmd {
        SessionCommands::SetRole { raw } => {
            store.set(ROLE_KEY, &raw)?;

            let resolved = Role::parse(&raw);
            if resolved == Role::Guest && raw != Role::Guest.as_str() {
                tracing::warn!("Stored role {:?} is not recognized and resolves to guest", raw);
            }

            output_success(
                output_format,
                &format!("Stored role {:?} (resolves to {})", raw, resolved),
                Some(json!({
                    "stored": raw,
                    "role": resolved,
                    "path": store.path().display().to_string()
                })),
            )
        }
        SessionCommands::Clear => {
            let existed = store.remove(ROLE_KEY)?;
            let message = if existed {
                "Stored role cleared"
            } else {
                "No stored role to clear"
            };
            output_success(output_format, message, Some(json!({ "cleared": existed })))
        }
    }
}
