use anyhow::Result;
use tokio::sync::mpsc;

use super::CommandInterpreter;
use super::SessionMonitor;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::SessionState;
use crate::domain::models::Transcript;

pub struct ActionsService {}

impl ActionsService {
    /// Owns the session and transcript. Actions are applied strictly one at a
    /// time, so a command never overlaps another command or an auth change,
    /// and every cache write is published together with the lines reporting it.
    pub async fn start(
        interpreter: CommandInterpreter,
        monitor: SessionMonitor,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut session = SessionState::logged_out();
        let mut transcript = Transcript::default();

        while let Some(action) = rx.recv().await {
            let completed = matches!(action, Action::Submit(_));
            (session, transcript) = match action {
                Action::Submit(input) => interpreter.execute(session, transcript, &input).await,
                Action::AuthChanged(user) => monitor.on_auth_change(user).await,
            };

            event_tx.send(Event::TranscriptUpdated(
                session.clone(),
                transcript.clone(),
            ))?;

            if completed {
                event_tx.send(Event::CommandCompleted)?;
            }
        }

        tracing::debug!("action channel closed");
        return Ok(());
    }
}
