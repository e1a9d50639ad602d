//! Process-wide settings resolved from defaults, the TOML config file and
//! command-line flags.

mod config;

pub use config::*;
