#[cfg(test)]
#[path = "api_entry_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

/// Maximum number of endpoints a single user may register.
pub const MAX_APIS: usize = 2;

pub const LAST_PING_NEVER: &str = "Never";
pub const STATUS_PENDING: &str = "Pending";

/// One registered endpoint. Entries are created and removed, never edited by
/// the terminal itself.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntry {
    pub id: i64,
    pub url: String,
    pub last_ping: String,
    pub status: String,
}

impl ApiEntry {
    pub fn new(id: i64, url: &str) -> ApiEntry {
        return ApiEntry {
            id,
            url: url.to_string(),
            last_ping: LAST_PING_NEVER.to_string(),
            status: STATUS_PENDING.to_string(),
        };
    }

    pub fn has_valid_scheme(url: &str) -> bool {
        return url.starts_with("http://") || url.starts_with("https://");
    }

    pub fn format(&self) -> String {
        return format!(
            "ID: {} | URL: {} | Status: {} | Last Ping: {}",
            self.id, self.url, self.status, self.last_ping
        );
    }
}

/// Per-user document held by the record store, keyed by email.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct UserRecord {
    #[serde(default)]
    pub apis: Vec<ApiEntry>,
}

/// Field operation applied to `UserRecord::apis`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ApisUpdate {
    /// Append each entry not already present (deep equality).
    Union(Vec<ApiEntry>),
    /// Drop every entry equal to one of these.
    Remove(Vec<ApiEntry>),
    Replace(Vec<ApiEntry>),
}

impl UserRecord {
    pub fn apply(&mut self, update: &ApisUpdate) {
        match update {
            ApisUpdate::Union(entries) => {
                for entry in entries {
                    if !self.apis.contains(entry) {
                        self.apis.push(entry.clone());
                    }
                }
            }
            ApisUpdate::Remove(entries) => {
                self.apis.retain(|api| !entries.contains(api));
            }
            ApisUpdate::Replace(entries) => {
                self.apis = entries.clone();
            }
        }
    }

    pub fn find(&self, id: i64) -> Option<&ApiEntry> {
        return self.apis.iter().find(|api| api.id == id);
    }
}
