//! Data models for the terminal front-end.
//!
//! - [`OutputLine`] - one scrollback entry

mod terminal;

pub use terminal::OutputLine;
#[cfg(test)]
pub use terminal::OutputLineData;
