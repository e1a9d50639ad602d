use std::collections::HashMap;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::ApisUpdate;
use crate::domain::models::RecordStore;
use crate::domain::models::StoreName;
use crate::domain::models::UserRecord;

/// Process-local store. Records disappear with the process.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryRecordStore {
    pub fn with_records(records: HashMap<String, UserRecord>) -> MemoryRecordStore {
        return MemoryRecordStore {
            records: RwLock::new(records),
        };
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn name(&self) -> StoreName {
        StoreName::Memory
    }

    async fn get(&self, key: &str) -> Result<Option<UserRecord>> {
        return Ok(self.records.read().await.get(key).cloned());
    }

    async fn set_merge(&self, key: &str, update: ApisUpdate) -> Result<()> {
        let mut records = self.records.write().await;
        records.entry(key.to_string()).or_default().apply(&update);
        return Ok(());
    }

    async fn update(&self, key: &str, update: ApisUpdate) -> Result<()> {
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(record) => record.apply(&update),
            None => bail!("No document to update: users/{key}"),
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ApiEntry;

    #[tokio::test]
    async fn set_merge_creates_and_update_requires_existing() {
        let store = MemoryRecordStore::default();
        let entry = ApiEntry::new(1, "https://a.test");

        assert!(store.get("a@b.com").await.unwrap().is_none());

        let err = store
            .update("a@b.com", ApisUpdate::Remove(vec![entry.clone()]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No document to update: users/a@b.com");

        store
            .set_merge("a@b.com", ApisUpdate::Union(vec![entry.clone()]))
            .await
            .unwrap();
        store
            .update("a@b.com", ApisUpdate::Remove(vec![entry]))
            .await
            .unwrap();

        let record = store.get("a@b.com").await.unwrap().unwrap();
        assert!(record.apis.is_empty());
    }

    #[tokio::test]
    async fn records_are_keyed_per_user() {
        let mut seeded = HashMap::new();
        seeded.insert(
            "a@b.com".to_string(),
            UserRecord {
                apis: vec![ApiEntry::new(1, "https://a.test")],
            },
        );
        let store = MemoryRecordStore::with_records(seeded);

        assert_eq!(store.get("a@b.com").await.unwrap().unwrap().apis.len(), 1);
        assert!(store.get("c@d.com").await.unwrap().is_none());
    }
}
