use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use super::{KeyValueStore, StorageError};

type Document = BTreeMap<String, Value>;

/// JSON-file backed store. The whole document is read on every `get`, and
/// writers replace it with a rename so readers never observe a partial file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut document = self.load_for_write();
        document.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&document)
    }

    /// Remove a key. Returns whether the key was present.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut document = self.load_for_write();
        let existed = document.remove(key).is_some();
        if existed {
            self.save(&document)?;
        }
        Ok(existed)
    }

    fn read_document(&self) -> Result<Option<Document>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    fn load_for_write(&self) -> Document {
        match self.read_document() {
            Ok(document) => document.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Replacing unreadable storage document {}: {}", self.path.display(), e);
                Document::new()
            }
        }
    }

    fn save(&self, document: &Document) -> Result<(), StorageError> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;

        let content = serde_json::to_string_pretty(document)?;

        // Per-writer temp file in the target directory; persist is a rename.
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        tmp.write_all(content.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let document = match self.read_document() {
            Ok(document) => document?,
            Err(e) => {
                tracing::warn!("Ignoring unreadable storage document {}: {}", self.path.display(), e);
                return None;
            }
        };

        // Non-string values are treated as absent, not coerced.
        match document.get(key)? {
            Value::String(value) => Some(value.clone()),
            other => {
                tracing::debug!("Storage key {} holds non-string value {}", key, other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("storage.json"))
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        assert_eq!(store.get("user_role"), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        store_in(&tmp).set("user_role", "admin").unwrap();

        let reopened = store_in(&tmp);
        assert_eq!(reopened.get("user_role").as_deref(), Some("admin"));
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        store.set("session_token", "abc").unwrap();
        store.set("user_role", "super_admin").unwrap();

        assert_eq!(store.get("session_token").as_deref(), Some("abc"));
        assert_eq!(store.get("user_role").as_deref(), Some("super_admin"));
    }

    #[test]
    fn test_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        store.set("user_role", "admin").unwrap();

        assert!(store.remove("user_role").unwrap());
        assert!(!store.remove("user_role").unwrap());
        assert_eq!(store.get("user_role"), None);
    }

    #[test]
    fn test_corrupt_document_reads_as_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        fs::write(store.path(), "{ not json").unwrap();

        assert_eq!(store.get("user_role"), None);

        // Writing recovers the document.
        store.set("user_role", "admin").unwrap();
        assert_eq!(store.get("user_role").as_deref(), Some("admin"));
    }

    #[test]
    fn test_non_string_value_reads_as_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        fs::write(store.path(), r#"{"user_role": ["admin"], "flag": true}"#).unwrap();

        assert_eq!(store.get("user_role"), None);
        assert_eq!(store.get("flag"), None);
    }

    #[test]
    fn test_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("nested").join("dir").join("storage.json"));
        store.set("user_role", "admin").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_overlapping_writers_all_succeed() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        store.set("user_role", if i % 2 == 0 { "admin" } else { "super_admin" })?;
                    }
                    Ok::<_, StorageError>(())
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let role = store.get("user_role");
        assert!(matches!(role.as_deref(), Some("admin") | Some("super_admin")), "{:?}", role);

        // No temp files are left behind next to the document.
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
