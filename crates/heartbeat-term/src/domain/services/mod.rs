pub mod actions;
mod app_state;
pub mod events;
mod input_buffer;
mod interpreter;
mod ping_recorder;
mod session_monitor;

pub use app_state::*;
pub use input_buffer::*;
pub use interpreter::*;
pub use ping_recorder::*;
pub use session_monitor::*;
