//! Root application module.
//!
//! [`Terminal`] ties the namespace engine to a bounded scrollback: every
//! submitted line is dispatched and recorded as `"<input> : <result>"`.

use tracing::debug;
use treesh_core::{Namespace, execute};

use crate::config::APP_NAME;
use crate::models::OutputLine;
use crate::utils::RingBuffer;

// ============================================================================
// Terminal
// ============================================================================

/// A namespace session with its scrollback.
#[derive(Debug)]
pub struct Terminal {
    namespace: Namespace,
    /// Scrollback, oldest first (bounded by `--history`).
    history: RingBuffer<OutputLine>,
    next_seq: usize,
}

impl Terminal {
    /// Creates a terminal positioned at the root of an empty namespace.
    ///
    /// A zero `capacity` is treated as one line.
    pub fn new(capacity: usize) -> Self {
        Self {
            namespace: Namespace::new(),
            history: RingBuffer::new(capacity.max(1)),
            next_seq: 0,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Prompt showing the current position, e.g. `treesh:/a/b$ `.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", APP_NAME, self.namespace.pwd_path())
    }

    /// Dispatch one command line and record the result as the newest line.
    pub fn submit(&mut self, input: &str) -> &OutputLine {
        let input = input.trim();
        let result = execute(&mut self.namespace, input);
        debug!(input, result = %result, "submit");
        let seq = self.bump();
        self.push(OutputLine::result(seq, input, result))
    }

    /// Record front-end text that is not a command result.
    pub fn notice(&mut self, text: &str) {
        for line in text.lines() {
            let seq = self.bump();
            self.push(OutputLine::info(seq, line));
        }
    }

    /// Scrollback in display order, newest line first.
    pub fn lines_newest_first(&self) -> impl Iterator<Item = &OutputLine> {
        self.history.iter().rev()
    }

    /// Lines held in the scrollback and the most it will hold.
    pub fn scrollback_usage(&self) -> (usize, usize) {
        (self.history.len(), self.history.capacity())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn bump(&mut self) -> usize {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, line: OutputLine) -> &OutputLine {
        self.history.push(line)
    }
}
