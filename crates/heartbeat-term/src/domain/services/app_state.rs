#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::InputBuffer;
use super::DEFAULT_PROMPT;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::SessionState;
use crate::domain::models::Transcript;

const PAGE_SIZE: usize = 10;

pub struct AppStateProps {
    pub prompt: String,
}

impl Default for AppStateProps {
    fn default() -> AppStateProps {
        return AppStateProps {
            prompt: DEFAULT_PROMPT.to_string(),
        };
    }
}

/// What the render loop draws. Session and transcript are snapshots published
/// by the actions service; only the pending input is edited here.
pub struct AppState {
    pub input: InputBuffer,
    pub prompt: String,
    pub scroll_back: usize,
    pub session: SessionState,
    pub transcript: Transcript,
    pub waiting_for_backend: bool,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            input: InputBuffer::default(),
            prompt: props.prompt,
            scroll_back: 0,
            session: SessionState::logged_out(),
            transcript: Transcript::default(),
            waiting_for_backend: false,
        };
    }

    /// Applies one event. Returns true when the UI should exit.
    pub fn handle_event(&mut self, event: Event, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        match event {
            Event::KeyboardChar(c) => self.input.push(c),
            Event::KeyboardPaste(text) => self.input.paste(&text),
            Event::KeyboardBackspace => self.input.backspace(),
            Event::KeyboardEnter => {
                if self.waiting_for_backend {
                    return Ok(false);
                }

                let command = self.input.take();
                self.waiting_for_backend = true;
                self.scroll_back = 0;
                tx.send(Action::Submit(command))?;
            }
            Event::KeyboardCTRLC => {
                return Ok(true);
            }
            Event::TranscriptUpdated(session, transcript) => {
                self.session = session;
                self.transcript = transcript;
                self.scroll_back = 0;
            }
            Event::CommandCompleted => {
                self.waiting_for_backend = false;
            }
            Event::UIScrollUp => self.scroll_up(1),
            Event::UIScrollDown => self.scroll_down(1),
            Event::UIScrollPageUp => self.scroll_up(PAGE_SIZE),
            Event::UIScrollPageDown => self.scroll_down(PAGE_SIZE),
            Event::UITick => {}
        }

        return Ok(false);
    }

    /// Transcript entries split into display rows.
    pub fn display_lines(&self) -> Vec<&str> {
        return self
            .transcript
            .lines()
            .iter()
            .flat_map(|line| line.split('\n'))
            .collect();
    }

    fn scroll_up(&mut self, rows: usize) {
        let max = self.display_lines().len();
        self.scroll_back = (self.scroll_back + rows).min(max);
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }
}
