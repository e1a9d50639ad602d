mod action;
mod api_entry;
mod command;
mod error;
mod event;
mod identity;
mod ping;
mod record_store;
mod session;

pub use action::*;
pub use api_entry::*;
pub use command::*;
pub use error::*;
pub use event::*;
pub use identity::*;
pub use ping::*;
pub use record_store::*;
pub use session::*;
