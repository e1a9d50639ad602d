use anyhow::Result;
use tokio::sync::mpsc;

use super::available_commands;
use crate::domain::models::Action;
use crate::domain::models::SessionState;
use crate::domain::models::SharedIdentity;
use crate::domain::models::SharedRecordStore;
use crate::domain::models::Transcript;
use crate::domain::models::User;

pub fn login_banner(email: &str) -> Vec<String> {
    let mut lines = vec![format!("✅ You are logged in as {email}"), "".to_string()];
    lines.extend(available_commands(true));
    return lines;
}

pub fn logout_banner() -> Vec<String> {
    let mut lines = vec!["👋 Logged out successfully".to_string(), "".to_string()];
    lines.extend(available_commands(false));
    return lines;
}

/// Rebuilds the session whenever the identity provider reports a change.
pub struct SessionMonitor {
    store: SharedRecordStore,
}

impl SessionMonitor {
    pub fn new(store: SharedRecordStore) -> SessionMonitor {
        return SessionMonitor { store };
    }

    /// Produces the replacement session and transcript for an auth change.
    /// A failed record fetch leaves the cache empty rather than blocking login.
    pub async fn on_auth_change(&self, user: Option<User>) -> (SessionState, Transcript) {
        let user = match user {
            Some(user) => user,
            None => {
                tracing::info!("signed out");
                return (SessionState::logged_out(), Transcript::new(logout_banner()));
            }
        };

        tracing::info!(email = user.email.as_str(), "signed in");

        let apis = match self.store.get(&user.email).await {
            Ok(Some(record)) => record.apis,
            Ok(None) => vec![],
            Err(err) => {
                tracing::warn!(error = %err, "failed to load record on sign-in");
                vec![]
            }
        };

        return (
            SessionState::logged_in(&user.email, apis),
            Transcript::new(login_banner(&user.email)),
        );
    }

    /// Forwards auth notifications into the action queue so they are applied
    /// in order with submitted commands. Returns when either side goes away.
    pub async fn watch(identity: SharedIdentity, tx: mpsc::UnboundedSender<Action>) -> Result<()> {
        let mut subscription = identity.subscribe();
        while let Some(user) = subscription.next().await {
            if tx.send(Action::AuthChanged(user)).is_err() {
                break;
            }
        }

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::bail;
    use async_trait::async_trait;

    use super::*;
    use crate::domain::models::ApiEntry;
    use crate::domain::models::ApisUpdate;
    use crate::domain::models::IdentityProvider;
    use crate::domain::models::RecordStore;
    use crate::domain::models::StoreName;
    use crate::domain::models::UserRecord;
    use crate::infrastructure::identity::LocalIdentity;
    use crate::infrastructure::stores::MemoryRecordStore;

    struct BrokenStore {}

    #[async_trait]
    impl RecordStore for BrokenStore {
        fn name(&self) -> StoreName {
            StoreName::Memory
        }

        async fn get(&self, _key: &str) -> Result<Option<UserRecord>> {
            bail!("permission denied")
        }

        async fn set_merge(&self, _key: &str, _update: ApisUpdate) -> Result<()> {
            bail!("permission denied")
        }

        async fn update(&self, _key: &str, _update: ApisUpdate) -> Result<()> {
            bail!("permission denied")
        }
    }

    #[tokio::test]
    async fn sign_in_loads_cached_apis_and_replaces_transcript() {
        let store = MemoryRecordStore::default();
        store
            .set_merge(
                "a@b.com",
                ApisUpdate::Union(vec![ApiEntry::new(1, "https://a.test")]),
            )
            .await
            .unwrap();
        let monitor = SessionMonitor::new(Arc::new(store));

        let (session, transcript) = monitor.on_auth_change(Some(User::new("a@b.com"))).await;

        assert!(session.is_logged_in);
        assert_eq!(session.user_email, "a@b.com");
        assert_eq!(session.apis.len(), 1);
        assert_eq!(transcript.lines(), login_banner("a@b.com").as_slice());
        assert_eq!(transcript.lines()[0], "✅ You are logged in as a@b.com");
    }

    #[tokio::test]
    async fn sign_in_without_record_has_empty_cache() {
        let monitor = SessionMonitor::new(Arc::new(MemoryRecordStore::default()));

        let (session, _) = monitor.on_auth_change(Some(User::new("new@b.com"))).await;

        assert!(session.is_logged_in);
        assert!(session.apis.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_fails_open() {
        let monitor = SessionMonitor::new(Arc::new(BrokenStore {}));

        let (session, transcript) = monitor.on_auth_change(Some(User::new("a@b.com"))).await;

        assert!(session.is_logged_in);
        assert!(session.apis.is_empty());
        assert_eq!(transcript.lines()[0], "✅ You are logged in as a@b.com");
    }

    #[tokio::test]
    async fn sign_out_resets_session() {
        let monitor = SessionMonitor::new(Arc::new(MemoryRecordStore::default()));

        let (session, transcript) = monitor.on_auth_change(None).await;

        assert_eq!(session, SessionState::logged_out());
        assert_eq!(transcript.lines(), logout_banner().as_slice());
        assert_eq!(transcript.lines()[2], "Available Commands:");
    }

    #[tokio::test]
    async fn watch_forwards_current_state_then_changes() {
        let identity = Arc::new(LocalIdentity::new("a@b.com"));
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(SessionMonitor::watch(identity.clone(), tx));

        assert!(matches!(rx.recv().await, Some(Action::AuthChanged(None))));

        identity.sign_in_interactive().await.unwrap();
        match rx.recv().await {
            Some(Action::AuthChanged(Some(user))) => assert_eq!(user.email, "a@b.com"),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
