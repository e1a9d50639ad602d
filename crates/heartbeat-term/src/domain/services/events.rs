use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

/// Maps a raw terminal event to a UI event. Ctrl/Alt/Super/Meta chords are left
/// to the host, except Ctrl+C which exits.
pub fn map_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp);
            }
            MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown);
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            if keyevent.kind == KeyEventKind::Release {
                return None;
            }

            if keyevent.modifiers.contains(KeyModifiers::CONTROL)
                && keyevent.code == KeyCode::Char('c')
            {
                return Some(Event::KeyboardCTRLC);
            }

            if keyevent
                .modifiers
                .intersects(
                KeyModifiers::CONTROL
                    | KeyModifiers::ALT
                    | KeyModifiers::SUPER
                    | KeyModifiers::META,
            )
            {
                return None;
            }

            return match keyevent.code {
                KeyCode::Char(c) => Some(Event::KeyboardChar(c)),
                KeyCode::Enter => Some(Event::KeyboardEnter),
                KeyCode::Backspace => Some(Event::KeyboardBackspace),
                KeyCode::Up => Some(Event::UIScrollUp),
                KeyCode::Down => Some(Event::UIScrollDown),
                KeyCode::PageUp => Some(Event::UIScrollPageUp),
                KeyCode::PageDown => Some(Event::UIScrollPageDown),
                _ => None,
            };
        }
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => map_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
