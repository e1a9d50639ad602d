use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Collaborator,
}

/// Every failure a command can hit. The display text is the transcript line
/// shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("⚠️ Please log in first.")]
    NotLoggedIn,
    #[error("⚠️ Already logged in.")]
    AlreadyLoggedIn,
    #[error("⚠️ You're not logged in.")]
    NotLoggedInForLogout,
    #[error("⚠️ Please provide a URL.")]
    MissingUrl,
    #[error("⚠️ Please provide an API ID.")]
    MissingId,
    #[error("❌ Invalid URL. Only HTTP and HTTPS URLs are allowed.")]
    InvalidUrl,
    #[error("⚠️ Maximum {0} APIs allowed. Remove one to add a new.")]
    LimitReached(usize),
    #[error("❌ No APIs found for user")]
    NoRecord,
    #[error("❌ API with ID {0} not found")]
    EntryNotFound(String),
    #[error("❌ Google login failed: {0}")]
    SignInFailed(String),
    #[error("❌ Logout failed: {0}")]
    SignOutFailed(String),
    #[error("❌ Record store request failed: {0}")]
    StoreFailed(String),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        return match self {
            CommandError::NoRecord | CommandError::EntryNotFound(_) => ErrorKind::NotFound,
            CommandError::SignInFailed(_)
            | CommandError::SignOutFailed(_)
            | CommandError::StoreFailed(_) => ErrorKind::Collaborator,
            _ => ErrorKind::Validation,
        };
    }

    /// Collaborator failures are worth a warning, user mistakes are not.
    pub fn log_level(&self) -> tracing::Level {
        if self.kind() == ErrorKind::Collaborator {
            return tracing::Level::WARN;
        }

        return tracing::Level::DEBUG;
    }

    pub fn store(err: anyhow::Error) -> CommandError {
        return CommandError::StoreFailed(err.to_string());
    }
}
