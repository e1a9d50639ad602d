use anyhow::Result;

use crate::domain::models::ApisUpdate;
use crate::domain::models::PingReport;
use crate::domain::models::SharedRecordStore;

/// Write-back path for probe results. Rewrites `status` and `lastPing` of an
/// existing entry; never creates entries.
pub struct PingRecorder {
    store: SharedRecordStore,
}

impl PingRecorder {
    pub fn new(store: SharedRecordStore) -> PingRecorder {
        return PingRecorder { store };
    }

    /// Returns `false` when the user has no entry with the reported id.
    pub async fn record(&self, email: &str, report: &PingReport) -> Result<bool> {
        let record = match self.store.get(email).await? {
            Some(record) => record,
            None => return Ok(false),
        };

        let mut found = false;
        let apis = record
            .apis
            .into_iter()
            .map(|mut api| {
                if api.id == report.id {
                    api.status = report.status.to_string();
                    api.last_ping = report.last_ping();
                    found = true;
                }
                api
            })
            .collect::<Vec<_>>();

        if !found {
            tracing::debug!(id = report.id, "ping report for unknown entry");
            return Ok(false);
        }

        self.store.update(email, ApisUpdate::Replace(apis)).await?;
        tracing::info!(id = report.id, status = %report.status, "ping recorded");

        return Ok(true);
    }
}
