//! Durable key-value storage used as the local verification cache.
//!
//! Modeled on a browser local-storage shape so the backing implementation
//! (in-memory, file, remote) stays swappable and testable without a browser
//! environment.

use thiserror::Error;

pub mod in_memory;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStorageError>;

    async fn delete(&self, key: &str) -> Result<(), KeyValueStorageError>;
}

#[derive(Clone, Error, Debug)]
pub enum KeyValueStorageError {
    #[error("Get error: `{0}`")]
    Get(String),
    #[error("Set error: `{0}`")]
    Set(String),
    #[error("Delete error: `{0}`")]
    Delete(String),
}
