//! Inbound command parsing.
//!
//! Commands are case-sensitive literals with no arguments; anything else is
//! a chat payload.

use crate::state::Language;

/// A classified inbound message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/start`: begin searching.
    Start,
    /// `/stop`: stop searching, or end the current chat.
    Stop,
    /// `/next`: end the current chat and search again.
    Next,
    /// `/ru` or `/en`: language selection, honored on first contact only.
    Lang(Language),
    /// Anything else; relayed verbatim while chatting.
    Text(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a trimmed message body.
    pub fn parse(text: &'a str) -> Self {
        match text {
            "/start" => Command::Start,
            "/stop" => Command::Stop,
            "/next" => Command::Next,
            "/en" => Command::Lang(Language::En),
            "/ru" => Command::Lang(Language::Ru),
            other => Command::Text(other),
        }
    }
}
