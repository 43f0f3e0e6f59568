pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod storage;

pub use auth::{Role, RoleProvider, ROLE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
