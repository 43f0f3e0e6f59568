//! Durable client-side key/value storage.
//!
//! The role core only ever reads through [`KeyValueStore`]. Writers (the login
//! flow, or the CLI acting for it) use the inherent methods of each backend.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Read-only view of a string key/value store.
///
/// Reads are total: backends report I/O or decoding problems as `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
