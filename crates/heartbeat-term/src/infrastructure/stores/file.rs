use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::models::ApisUpdate;
use crate::domain::models::RecordStore;
use crate::domain::models::StoreName;
use crate::domain::models::UserRecord;

type Records = BTreeMap<String, UserRecord>;

/// Keeps every user record in a single JSON document, rewritten on each
/// mutation.
pub struct FileRecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileRecordStore {
    pub fn new(path: &str) -> Result<FileRecordStore> {
        if path.is_empty() {
            bail!("store-file is not defined");
        }

        return Ok(FileRecordStore {
            path: PathBuf::from(path),
            lock: Mutex::new(()),
        });
    }

    async fn read_all(&self) -> Result<Records> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Records::new());
        }

        let json_str = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        if json_str.trim().is_empty() {
            return Ok(Records::new());
        }

        let records = serde_json::from_str::<Records>(&json_str)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        return Ok(records);
    }

    async fn write_all(&self, records: &Records) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(records)?).await?;
        return Ok(());
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    fn name(&self) -> StoreName {
        StoreName::File
    }

    async fn get(&self, key: &str) -> Result<Option<UserRecord>> {
        let _guard = self.lock.lock().await;
        return Ok(self.read_all().await?.remove(key));
    }

    async fn set_merge(&self, key: &str, update: ApisUpdate) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        records.entry(key.to_string()).or_default().apply(&update);
        return self.write_all(&records).await;
    }

    async fn update(&self, key: &str, update: ApisUpdate) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        match records.get_mut(key) {
            Some(record) => record.apply(&update),
            None => bail!("No document to update: users/{key}"),
        }
        return self.write_all(&records).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ApiEntry;

    fn store_in(dir: &tempfile::TempDir) -> FileRecordStore {
        let path = dir.path().join("nested/records.json");
        FileRecordStore::new(path.to_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.get("a@b.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn mutations_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let entry = ApiEntry::new(5, "https://a.test");

        store_in(&dir)
            .set_merge("a@b.com", ApisUpdate::Union(vec![entry.clone()]))
            .await
            .unwrap();

        let reopened = store_in(&dir);
        let record = reopened.get("a@b.com").await.unwrap().unwrap();
        assert_eq!(record.apis, vec![entry.clone()]);

        reopened
            .update("a@b.com", ApisUpdate::Remove(vec![entry]))
            .await
            .unwrap();
        assert!(store_in(&dir)
            .get("a@b.com")
            .await
            .unwrap()
            .unwrap()
            .apis
            .is_empty());
    }

    #[tokio::test]
    async fn document_uses_original_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .set_merge(
                "a@b.com",
                ApisUpdate::Union(vec![ApiEntry::new(5, "https://a.test")]),
            )
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("nested/records.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["a@b.com"]["apis"][0]["lastPing"], "Never");
    }

    #[tokio::test]
    async fn update_without_record_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store
            .update("a@b.com", ApisUpdate::Replace(vec![]))
            .await
            .is_err());
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(FileRecordStore::new("").is_err());
    }
}
