//! Interactive terminal session.
//!
//! A [`Session`] is what a terminal front end drives: it owns the current
//! filesystem, the scrollback transcript, and the command history with its
//! up/down cursor. Everything else is delegated to [`process_command`] and
//! the autocomplete functions.

use log::debug;

use crate::config::{INTERRUPT_MARKER, MAX_COMMAND_HISTORY, MAX_TRANSCRIPT_LINES, WELCOME_LINES};
use crate::core::autocomplete::{AutocompleteResult, autocomplete, get_hint};
use crate::core::commands::{CommandResult, process_command, prompt};
use crate::core::FileSystem;
use crate::models::TerminalLine;
use crate::utils::RingBuffer;

/// State of one terminal session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Filesystem the session started from (restored by `reset`).
    initial: FileSystem,
    fs: FileSystem,
    /// Terminal scrollback (bounded by `MAX_TRANSCRIPT_LINES`).
    transcript: RingBuffer<TerminalLine>,
    /// Submitted lines for up/down navigation.
    history: RingBuffer<String>,
    /// Current position in command history (for navigation).
    history_index: Option<usize>,
}

impl Session {
    /// Start a session on the seeded filesystem.
    pub fn new() -> Self {
        Self::with_filesystem(FileSystem::initial())
    }

    /// Start a session on an existing filesystem, e.g. a loaded snapshot.
    pub fn with_filesystem(fs: FileSystem) -> Self {
        let mut session = Self {
            initial: fs.clone(),
            fs,
            transcript: RingBuffer::new(MAX_TRANSCRIPT_LINES),
            history: RingBuffer::new(MAX_COMMAND_HISTORY),
            history_index: None,
        };
        session.push_welcome();
        session
    }

    fn push_welcome(&mut self) {
        self.transcript
            .extend(WELCOME_LINES.iter().map(|line| TerminalLine::output(*line)));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn filesystem(&self) -> &FileSystem {
        &self.fs
    }

    pub fn transcript(&self) -> &RingBuffer<TerminalLine> {
        &self.transcript
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &RingBuffer<String> {
        &self.history
    }

    /// Prompt for the next input line.
    pub fn prompt(&self) -> String {
        prompt(&self.fs)
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Run one input line.
    ///
    /// The line is echoed with the prompt it was typed at, then the output
    /// is appended (or the transcript cleared) and the new filesystem adopted.
    pub fn submit(&mut self, input: &str) -> CommandResult {
        self.transcript
            .push(TerminalLine::input(self.prompt(), input));

        let result = process_command(&self.fs, input);
        self.fs = result.fs.clone();

        // `clear` wipes the screen and is not recalled by Up
        if result.clear_screen {
            self.transcript.clear();
            self.history_index = None;
        } else {
            self.transcript
                .extend(result.output.iter().map(TerminalLine::output));
            self.add_to_history(input);
        }
        result
    }

    /// Abandon the current input line (Ctrl+C).
    pub fn interrupt(&mut self, partial: &str) {
        self.transcript.push(TerminalLine::input(
            self.prompt(),
            format!("{}{}", partial, INTERRUPT_MARKER),
        ));
        self.history_index = None;
    }

    /// Drop the scrollback without touching anything else (Ctrl+L).
    pub fn clear_screen(&mut self) {
        self.transcript.clear();
    }

    /// Restore the starting filesystem and transcript. History is kept.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.fs = self.initial.clone();
        self.transcript.clear();
        self.push_welcome();
        self.history_index = None;
    }

    // ========================================================================
    // Command History
    // ========================================================================

    fn add_to_history(&mut self, input: &str) {
        if !input.trim().is_empty() && self.history.last().map(String::as_str) != Some(input) {
            self.history.push(input.to_string());
        }
        self.history_index = None;
    }

    /// Recall the previous history entry (Up arrow).
    ///
    /// Stays on the oldest entry once reached. Returns `None` only when
    /// the history is empty.
    pub fn history_up(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }

        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.history.get(index).cloned()
    }

    /// Recall the next history entry (Down arrow).
    ///
    /// Moving past the newest entry yields an empty line and leaves
    /// navigation. Returns `None` when not navigating.
    pub fn history_down(&mut self) -> Option<String> {
        let i = self.history_index?;
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.history.get(i + 1).cloned()
        } else {
            self.history_index = None;
            Some(String::new())
        }
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Tab completion for a partial input line.
    pub fn complete(&self, partial: &str) -> AutocompleteResult {
        autocomplete(partial, &self.fs)
    }

    /// Ghost text for a partial input line.
    pub fn hint(&self, partial: &str) -> Option<String> {
        get_hint(partial, &self.fs)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
