use crate::core::ResultStore;
use crate::utils::error::ErrorCode;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process [`ResultStore`] backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn get_data(&self, key: &str) -> Result<String, ErrorCode> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or(ErrorCode::NotFound)
    }

    async fn set_data(&self, key: &str, value: &str) -> Result<(), ErrorCode> {
        if key.is_empty() {
            return Err(ErrorCode::InvalidArgument);
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.get_data("missing").await, Err(ErrorCode::NotFound));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set_data("key1", "value1").await.unwrap();
        assert_eq!(store.get_data("key1").await, Ok("value1".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let store = MemoryStore::new();
        assert_eq!(store.set_data("", "x").await, Err(ErrorCode::InvalidArgument));
    }
}
