//! The command router.
//!
//! `Switchboard::handle_message` is the whole inbound surface: one call per
//! received message, returning the outbound sends it produced. The transport
//! adapter only wires this to the bridge, which keeps every flow testable
//! without a live messenger.

use crate::handlers::command::Command;
use crate::matchmaker::Matchmaker;
use crate::state::{LanguageTable, SessionId, UserState};
use crate::texts::{self, Reply};
use crate::transport::Outbound;
use parking_lot::Mutex;
use tracing::{debug, info};

/// The matchmaking service: registry, language table, and routing logic
/// behind a single lock.
///
/// The pairing scan-and-commit must be atomic relative to every other
/// registry operation, so all state sits under one mutex and
/// `handle_message` holds it for the whole transition. The returned sends
/// are issued by the caller after the lock is released, in order, so they
/// never reorder relative to the state change that produced them.
pub struct Switchboard {
    inner: Mutex<Inner>,
}

struct Inner {
    matchmaker: Matchmaker,
    languages: LanguageTable,
}

impl Switchboard {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                matchmaker: Matchmaker::new(),
                languages: LanguageTable::new(),
            }),
        }
    }

    /// Route one inbound message. An absent body normalizes to the empty
    /// string; nothing here ever fails, every input resolves to zero or
    /// more sends.
    pub fn handle_message(&self, from: &str, body: Option<&str>) -> Vec<Outbound> {
        let text = body.unwrap_or("").trim();
        let mut out = Vec::new();
        self.inner.lock().route(from, text, &mut out);
        out
    }
}

impl Default for Switchboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn route(&mut self, from: &str, text: &str, out: &mut Vec<Outbound>) {
        let cmd = Command::parse(text);

        // Language gate: first contact must pick /ru or /en. A valid choice
        // falls through to the idle handling of the same message.
        if self.languages.get(from).is_none() {
            match cmd {
                Command::Lang(lang) => {
                    self.languages.set_if_absent(from, lang);
                    info!(user = %from, lang = ?lang, "Language chosen");
                }
                _ => {
                    out.push(Outbound::new(from, texts::CHOOSE_LANGUAGE));
                    return;
                }
            }
        }

        let caller: SessionId = from.to_string();
        match self.matchmaker.state_of(from).cloned() {
            Some(UserState::Chatting { partner }) => match cmd {
                Command::Next => {
                    self.reply_to(out, from, &texts::NEXT_SEARCH);
                    self.end_dialog(out, &caller, &partner);
                    self.start_search(out, &caller);
                }
                Command::Stop => {
                    self.reply_to(out, from, &texts::CHAT_ENDED);
                    self.end_dialog(out, &caller, &partner);
                    self.start_search(out, &caller);
                }
                _ => {
                    // Chat payload: relay verbatim to the partner, no echo.
                    debug!(from = %from, to = %partner, "Relaying chat message");
                    out.push(Outbound::new(&partner, text));
                }
            },
            Some(UserState::Searching) => match cmd {
                Command::Stop => {
                    self.reply_to(out, from, &texts::SEARCH_STOPPED);
                    self.matchmaker.stop_search(from);
                }
                _ => self.reply_to(out, from, &texts::STILL_SEARCHING),
            },
            None => match cmd {
                Command::Start => {
                    self.reply_to(out, from, &texts::SEARCH_STARTED);
                    self.start_search(out, &caller);
                }
                _ => self.reply_to(out, from, &texts::WELCOME),
            },
        }
    }

    /// Start a search and, on a match, notify both parties in their own
    /// language, caller first.
    fn start_search(&mut self, out: &mut Vec<Outbound>, id: &SessionId) {
        if let Some(partner) = self.matchmaker.start_search(id) {
            self.reply_to(out, id, &texts::PARTNER_FOUND);
            self.reply_to(out, &partner, &texts::PARTNER_FOUND);
        }
    }

    /// Tear down a pairing and notify the partner. The initiator already
    /// received its acknowledgment from the routing step.
    fn end_dialog(&mut self, out: &mut Vec<Outbound>, initiator: &SessionId, partner: &SessionId) {
        self.matchmaker.end_dialog(initiator, partner);
        self.reply_to(out, partner, &texts::PARTNER_LEFT);
    }

    /// The outbound notifier: localize `reply` for `id`. An identity with no
    /// recorded language is silently skipped; router precedence makes that
    /// unreachable.
    fn reply_to(&self, out: &mut Vec<Outbound>, id: &str, reply: &Reply) {
        match self.languages.get(id) {
            Some(lang) => out.push(Outbound::new(id, lang.pick(reply))),
            None => debug!(user = %id, "Dropping reply for user with no language"),
        }
    }
}
