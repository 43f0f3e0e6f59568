use std::process::{Command, Output};

use anyhow::Result;
use serde_json::Value;

fn storefront(config_dir: &std::path::Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_storefront"))
        .env("STOREFRONT_CLI_CONFIG_DIR", config_dir)
        .args(args)
        .output()?)
}

#[test]
fn role_defaults_to_guest() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    let out = storefront(tmp.path(), &["role", "show", "--json"])?;
    assert!(out.status.success());
    let body: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(body["role"], "guest");
    assert_eq!(body["elevated"], false);

    let out = storefront(tmp.path(), &["role", "check"])?;
    assert!(!out.status.success());
    Ok(())
}

#[test]
fn stored_role_persists_between_runs() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    assert!(storefront(tmp.path(), &["session", "set-role", "super_admin"])?.status.success());

    let out = storefront(tmp.path(), &["role", "check", "--json"])?;
    assert!(out.status.success());
    let body: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(body["role"], "super_admin");
    assert_eq!(body["elevated"], true);

    assert!(storefront(tmp.path(), &["session", "clear"])?.status.success());
    assert!(!storefront(tmp.path(), &["role", "check"])?.status.success());
    Ok(())
}

#[test]
fn unrecognized_role_fails_closed() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    assert!(storefront(tmp.path(), &["session", "set-role", "ADMIN"])?.status.success());

    let out = storefront(tmp.path(), &["role", "show", "--json"])?;
    let body: Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(body["role"], "guest");
    assert!(!storefront(tmp.path(), &["role", "check"])?.status.success());
    Ok(())
}
