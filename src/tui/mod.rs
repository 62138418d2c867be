pub mod crossterm;
pub mod terminal;
pub mod terminal_guard;

pub use terminal::{terminal_size, CrosstermEvents, CrosstermScreen};
pub use terminal_guard::{TerminalGuard, TerminalRestorer};
