//! Matchmaking state: the user registry and the language table.

mod languages;
mod registry;

pub use languages::{Language, LanguageTable};
pub use registry::{Registry, SessionId, UserState};
