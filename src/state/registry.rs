//! Per-identity matchmaking state.

use std::collections::HashMap;

/// Opaque per-user identifier supplied by the transport. Never generated
/// internally.
pub type SessionId = String;

/// Matchmaking state of an active identity.
///
/// An identity with no registry entry is idle: it never searched, or its
/// search or chat has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserState {
    /// In the pairing pool, waiting for a partner.
    Searching,
    /// Exclusively paired; chat payloads are relayed to `partner`.
    Chatting { partner: SessionId },
}

/// Maps each active identity to its matchmaking state.
///
/// Invariant: if A is `Chatting { partner: B }` then B is
/// `Chatting { partner: A }`, and no identity is the partner of more than
/// one other. The `Matchmaker` is the only mutator.
#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<SessionId, UserState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&UserState> {
        self.users.get(id)
    }

    pub fn set(&mut self, id: SessionId, state: UserState) {
        self.users.insert(id, state);
    }

    pub fn remove(&mut self, id: &str) {
        self.users.remove(id);
    }

    /// Current entries, for the pairing scan. The order is unspecified
    /// beyond being stable while the map is not mutated.
    pub fn iter(&self) -> impl Iterator<Item = (&SessionId, &UserState)> {
        self.users.iter()
    }
}
