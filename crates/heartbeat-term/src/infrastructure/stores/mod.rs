mod file;
mod memory;

use std::sync::Arc;

use anyhow::Result;
pub use file::FileRecordStore;
pub use memory::MemoryRecordStore;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::SharedRecordStore;
use crate::domain::models::StoreName;

pub struct RecordStoreManager {}

impl RecordStoreManager {
    pub fn get(name: StoreName) -> Result<SharedRecordStore> {
        let store: SharedRecordStore = match name {
            StoreName::Memory => Arc::new(MemoryRecordStore::default()),
            StoreName::File => Arc::new(FileRecordStore::new(&Config::get(
                ConfigKey::StoreFile,
            ))?),
        };

        tracing::debug!(store = %store.name(), "opened record store");
        return Ok(store);
    }
}
