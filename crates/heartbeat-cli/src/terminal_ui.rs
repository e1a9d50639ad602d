use std::io;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use heartbeat_term::application::ui::{destruct_terminal_for_panic, start_loop};
use heartbeat_term::configuration::{Config, ConfigKey};
use heartbeat_term::domain::models::{Action, Event, SharedIdentity, StoreName};
use heartbeat_term::domain::services::actions::ActionsService;
use heartbeat_term::domain::services::{AppStateProps, CommandInterpreter, SessionMonitor};
use heartbeat_term::infrastructure::identity::LocalIdentity;
use heartbeat_term::infrastructure::stores::RecordStoreManager;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task;

/// Takes over the terminal and runs the render loop until the user exits.
async fn start_terminal_ui(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let app_state_props = AppStateProps {
        prompt: Config::get(ConfigKey::Prompt),
    };

    let result = start_loop(&mut terminal, app_state_props, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

/// Wires the collaborators, starts the background services and runs the UI.
pub async fn run() -> Result<()> {
    let store_name = StoreName::parse(&Config::get(ConfigKey::Store))
        .ok_or_else(|| anyhow!("Unknown store '{}'", Config::get(ConfigKey::Store)))?;
    let store = RecordStoreManager::get(store_name)?;
    let identity: SharedIdentity = Arc::new(LocalIdentity::default());

    let interpreter = CommandInterpreter::new(identity.clone(), store.clone())
        .with_prompt(&Config::get(ConfigKey::Prompt));
    let monitor = SessionMonitor::new(store);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();

    background_futures.spawn(async move {
        ActionsService::start(interpreter, monitor, event_tx, &mut action_rx).await
    });
    background_futures.spawn(SessionMonitor::watch(identity, action_tx.clone()));

    let ui_future = start_terminal_ui(action_tx, event_rx);

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = ui_future => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    result
}
