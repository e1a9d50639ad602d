use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

use super::ApisUpdate;
use super::UserRecord;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumVariantNames,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum StoreName {
    Memory,
    #[default]
    File,
}

impl StoreName {
    pub fn parse(s: &str) -> Option<StoreName> {
        return StoreName::iter().find(|e| e.to_string() == s);
    }
}

/// Document store holding one `UserRecord` per user, keyed by email.
#[async_trait]
pub trait RecordStore: Send + Sync {
    fn name(&self) -> StoreName;

    /// `Ok(None)` when no record exists for the key.
    async fn get(&self, key: &str) -> Result<Option<UserRecord>>;

    /// Applies the update, creating the record if it does not exist yet.
    async fn set_merge(&self, key: &str, update: ApisUpdate) -> Result<()>;

    /// Applies the update to an existing record. Fails when the record is missing.
    async fn update(&self, key: &str, update: ApisUpdate) -> Result<()>;
}

pub type SharedRecordStore = Arc<dyn RecordStore>;
