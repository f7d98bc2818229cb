use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::key_value_storage::{KeyValueStorage, KeyValueStorageError};

pub struct InMemoryStorage {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new(storage: HashMap<String, String>) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
        let hash_map_handle = self.storage.lock().await;

        Ok(hash_map_handle.get(key).map(|v| v.to_owned()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStorageError> {
        let mut hash_map_handle = self.storage.lock().await;

        hash_map_handle.insert(key.to_owned(), value);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), KeyValueStorageError> {
        let mut hash_map_handle = self.storage.lock().await;

        hash_map_handle.remove(key);

        Ok(())
    }
}
