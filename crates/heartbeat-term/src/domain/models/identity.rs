use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::watch;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: &str) -> User {
        return User {
            email: email.to_string(),
        };
    }
}

/// Identity collaborator. Sign-in and sign-out only report their own failure;
/// the resulting state change arrives through `subscribe`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_interactive(&self) -> Result<User>;
    async fn sign_out(&self) -> Result<()>;
    fn subscribe(&self) -> AuthSubscription;
}

pub type SharedIdentity = Arc<dyn IdentityProvider>;

/// Scoped auth-change subscription. The current state is delivered first;
/// dropping the subscription unsubscribes.
pub struct AuthSubscription {
    rx: watch::Receiver<Option<User>>,
}

impl AuthSubscription {
    pub fn new(mut rx: watch::Receiver<Option<User>>) -> AuthSubscription {
        rx.mark_changed();
        return AuthSubscription { rx };
    }

    /// Waits for the next notification. `None` once the provider is gone.
    pub async fn next(&mut self) -> Option<Option<User>> {
        if self.rx.changed().await.is_err() {
            return None;
        }

        return Some(self.rx.borrow_and_update().clone());
    }
}
