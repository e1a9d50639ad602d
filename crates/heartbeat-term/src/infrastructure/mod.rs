//! Adapters for the collaborators the terminal talks to: where user records
//! are kept and who is signed in.

pub mod identity;
pub mod stores;
