//! Terminal scrollback line types.

use std::fmt;

use crate::config::RESULT_SEPARATOR;

/// One line of scrollback with its position in the session.
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Monotonic sequence number, unique within one terminal.
    pub seq: usize,
    pub data: OutputLineData,
}

/// What a scrollback line shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// A submitted command line and its rendered result.
    Result { input: String, result: String },
    /// Front-end text that did not go through the dispatcher (banner, help).
    Info(String),
}

impl OutputLine {
    pub(crate) fn new(seq: usize, data: OutputLineData) -> Self {
        Self { seq, data }
    }

    pub fn result(seq: usize, input: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(
            seq,
            OutputLineData::Result {
                input: input.into(),
                result: result.into(),
            },
        )
    }

    pub fn info(seq: usize, text: impl Into<String>) -> Self {
        Self::new(seq, OutputLineData::Info(text.into()))
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not sequence numbers
        self.data == other.data
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            OutputLineData::Result { input, result } => {
                write!(f, "{}{}{}", input, RESULT_SEPARATOR, result)
            }
            OutputLineData::Info(text) => f.write_str(text),
        }
    }
}
