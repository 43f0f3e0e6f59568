use clap::Subcommand;
use serde_json::{json, Value};

use crate::auth::{Role, RoleProvider};
use crate::cli::config::open_store;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::storage::KeyValueStore;

#[derive(Subcommand)]
pub enum RoleCommands {
    #[command(about = "Show the resolved session role")]
    Show,

    #[command(about = "Check for admin access (exit status 1 when not elevated)")]
    Check,
}

pub async fn handle(cmd: RoleCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let provider = RoleProvider::new(open_store()?);
    run_with(cmd, &output_format, &provider)
}

pub fn run_with<S: KeyValueStore>(
    cmd: RoleCommands,
    output_format: &OutputFormat,
    provider: &RoleProvider<S>,
) -> anyhow::Result<()> {
    // One read per command so the printed role and the check never disagree.
    let role = provider.resolve_role();

    match cmd {
        RoleCommands::Show => {
            output_success(output_format, &format!("Current role: {}", role), Some(role_fields(role)))
        }
        RoleCommands::Check => {
            if !role.is_elevated() {
                anyhow::bail!("Role {} does not have admin access", role);
            }
            output_success(output_format, &format!("Role {} has admin access", role), Some(role_fields(role)))
        }
    }
}

fn role_fields(role: Role) -> Value {
    json!({
        "role": role,
        "elevated": role.is_elevated()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ROLE_KEY;
    use crate::storage::MemoryStore;

    #[test]
    fn test_check_passes_for_admins() {
        for raw in ["admin", "super_admin"] {
            let provider = RoleProvider::new(MemoryStore::with_value(ROLE_KEY, raw));
            assert!(run_with(RoleCommands::Check, &OutputFormat::Json, &provider).is_ok());
        }
    }

    #[test]
    fn test_check_fails_for_guest_and_garbage() {
        let empty = RoleProvider::new(MemoryStore::new());
        assert!(run_with(RoleCommands::Check, &OutputFormat::Text, &empty).is_err());

        let garbage = RoleProvider::new(MemoryStore::with_value(ROLE_KEY, "root"));
        let err = run_with(RoleCommands::Check, &OutputFormat::Text, &garbage).unwrap_err();
        assert_eq!(err.to_string(), "Role guest does not have admin access");
    }

    #[test]
    fn test_show_never_fails() {
        let provider = RoleProvider::new(MemoryStore::with_value(ROLE_KEY, "???"));
        assert!(run_with(RoleCommands::Show, &OutputFormat::Text, &provider).is_ok());
    }

    #[test]
    fn test_role_fields() {
        assert_eq!(
            role_fields(Role::SuperAdmin),
            json!({ "role": "super_admin", "elevated": true })
        );
        assert_eq!(role_fields(Role::Guest), json!({ "role": "guest", "elevated": false }));
    }
}
