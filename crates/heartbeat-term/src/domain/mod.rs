//! Core domain logic: the command interpreter, session handling and the
//! models they share, independent of the terminal and of any concrete store.

pub mod models;
pub mod services;
