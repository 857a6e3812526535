//! Terminal-related data types for transcript rendering.

use std::fmt;

/// A single line of terminal scrollback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalLine {
    /// Command with the prompt that was shown when it was entered
    Input { prompt: String, input: String },
    /// Plain output text
    Output(String),
}

impl TerminalLine {
    pub fn input(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Input {
            prompt: prompt.into(),
            input: input.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }

    /// Check if this line echoes user input.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }
}

impl fmt::Display for TerminalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { prompt, input } => write!(f, "{} {}", prompt, input),
            Self::Output(text) => f.write_str(text),
        }
    }
}
