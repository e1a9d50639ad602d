//! Terminal front end for APIHeartbeat.
//!
//! A signed-in user registers up to two HTTP(S) endpoints for periodic uptime
//! pings, lists them and removes them by typing commands at a prompt. Identity
//! and record storage are collaborators behind traits; this crate ships local
//! adapters for both along with the command interpreter and the terminal UI.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, ApiEntry, CommandError, Event, IdentityProvider, RecordStore, SessionState,
    Transcript, User, UserRecord,
};
pub use domain::services::{AppStateProps, CommandInterpreter, PingRecorder, SessionMonitor};
pub use infrastructure::identity::LocalIdentity;
pub use infrastructure::stores::RecordStoreManager;
