use super::SessionState;
use super::Transcript;

#[derive(Debug)]
pub enum Event {
    KeyboardChar(char),
    KeyboardBackspace,
    KeyboardEnter,
    KeyboardPaste(String),
    KeyboardCTRLC,
    TranscriptUpdated(SessionState, Transcript),
    CommandCompleted,
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
