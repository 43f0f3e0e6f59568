use std::fs;
use std::path::PathBuf;

use crate::storage::FileStore;

/// File holding the durable client-side key/value store.
pub const STORAGE_FILE: &str = "storage.json";

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("STOREFRONT_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("storefront").join("cli")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn open_store() -> anyhow::Result<FileStore> {
    Ok(FileStore::new(get_config_dir()?.join(STORAGE_FILE)))
}
