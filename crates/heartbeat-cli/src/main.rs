use std::fs::OpenOptions;

use anyhow::Result;
use heartbeat_term::application::cli;
use heartbeat_term::configuration::{Config, ConfigKey};
use log::LevelFilter;

mod terminal_ui;

const LOG_FILE: &str = "apiheartbeat.log";

fn init_logging() -> Result<()> {
    let log_level_filter = Config::get(ConfigKey::LogLevel)
        .parse()
        .unwrap_or(LevelFilter::Info);

    // Logs go to a file so the full-screen UI stays clean.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)?;

    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if !cli::parse().await? {
        return Ok(());
    }

    init_logging()?;
    log::info!(
        "Starting APIHeartbeat terminal (store: {}, prompt: {})",
        Config::get(ConfigKey::Store),
        Config::get(ConfigKey::Prompt)
    );

    std::panic::set_hook(Box::new(|panic_info| {
        heartbeat_term::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let result = terminal_ui::run().await;
    if let Err(err) = &result {
        log::error!("Terminal exited with error: {:?}", err);
    }

    result
}
