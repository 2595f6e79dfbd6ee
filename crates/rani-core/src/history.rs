//! Conversation history
//!
//! An append-only log of turns. The core never owns a session; each
//! front-end keeps its own log (per request for the API, per process for
//! the CLI) and hands it in when building a prompt, where only the most
//! recent window is rendered.

use serde::{Deserialize, Serialize};

/// Number of turns rendered into the prompt
pub const HISTORY_WINDOW: usize = 5;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Label used when rendering history into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Assistant => "RANI",
        }
    }
}

/// One (speaker, message) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// Append-only ordered sequence of turns
///
/// There is no size cap; only the read-time window bounds what reaches
/// the prompt. Unbounded growth over a long session is accepted.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: &str) {
        self.turns.push(Turn {
            speaker: Speaker::User,
            text: text.to_string(),
        });
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.turns.push(Turn {
            speaker: Speaker::Assistant,
            text: text.to_string(),
        });
    }

    /// The last `n` turns, oldest first
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Render turns as alternating speaker-labeled lines
pub fn render_history(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.speaker.label(), t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
