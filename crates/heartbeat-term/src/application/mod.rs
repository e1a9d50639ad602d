//! Application layer: command-line parsing and the terminal render loop that
//! sit between the user and the domain services.

pub mod cli;
pub mod ui;
