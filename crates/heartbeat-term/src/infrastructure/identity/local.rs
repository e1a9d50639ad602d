use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::watch;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AuthSubscription;
use crate::domain::models::IdentityProvider;
use crate::domain::models::User;

/// Signs in as the configured account without any external round trip.
pub struct LocalIdentity {
    email: String,
    tx: watch::Sender<Option<User>>,
}

impl Default for LocalIdentity {
    fn default() -> LocalIdentity {
        return LocalIdentity::new(&Config::get(ConfigKey::UserEmail));
    }
}

impl LocalIdentity {
    pub fn new(email: &str) -> LocalIdentity {
        let (tx, _rx) = watch::channel(None);
        return LocalIdentity {
            email: email.trim().to_string(),
            tx,
        };
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    async fn sign_in_interactive(&self) -> Result<User> {
        if self.email.is_empty() {
            bail!("no account configured, set user-email or APIHEARTBEAT_USER_EMAIL");
        }

        let user = User::new(&self.email);
        self.tx.send_replace(Some(user.clone()));
        return Ok(user);
    }

    async fn sign_out(&self) -> Result<()> {
        self.tx.send_replace(None);
        return Ok(());
    }

    fn subscribe(&self) -> AuthSubscription {
        return AuthSubscription::new(self.tx.subscribe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_current_state_first() {
        let identity = LocalIdentity::new("a@b.com");
        identity.sign_in_interactive().await.unwrap();

        let mut subscription = identity.subscribe();
        assert_eq!(subscription.next().await, Some(Some(User::new("a@b.com"))));

        identity.sign_out().await.unwrap();
        assert_eq!(subscription.next().await, Some(None));
    }

    #[tokio::test]
    async fn sign_in_without_account_fails() {
        let identity = LocalIdentity::new("  ");
        let err = identity.sign_in_interactive().await.unwrap_err();

        assert!(err.to_string().starts_with("no account configured"));
        assert_eq!(identity.subscribe().next().await, Some(None));
    }

    #[tokio::test]
    async fn subscription_ends_with_provider() {
        let identity = LocalIdentity::new("a@b.com");
        let mut subscription = identity.subscribe();
        drop(identity);

        assert_eq!(subscription.next().await, Some(None));
        assert_eq!(subscription.next().await, None);
    }
}
