//! Language preferences for bilingual prompts.

use super::SessionId;
use crate::texts::Reply;
use std::collections::HashMap;

/// Display language chosen by a user on first contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ru,
}

impl Language {
    /// Select the template text for this language.
    pub fn pick(&self, reply: &Reply) -> &'static str {
        match self {
            Language::En => reply.en,
            Language::Ru => reply.ru,
        }
    }
}

/// Maps identities to their chosen language.
///
/// A choice is recorded once and never changes for the process lifetime;
/// entries are never deleted.
#[derive(Debug, Default)]
pub struct LanguageTable {
    languages: HashMap<SessionId, Language>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Language> {
        self.languages.get(id).copied()
    }

    /// Record `lang` for `id` unless a choice already exists.
    pub fn set_if_absent(&mut self, id: &str, lang: Language) {
        self.languages.entry(id.to_string()).or_insert(lang);
    }
}
