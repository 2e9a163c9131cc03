//! The matchmaking state machine: search, pairing, teardown.
//!
//! Pure state transitions on the registry. The router composes the
//! user-visible notifications these transitions call for, so localization
//! stays in one place.

use crate::state::{Registry, SessionId, UserState};
use tracing::debug;

/// Owns the user registry and performs every state transition on it.
#[derive(Debug, Default)]
pub struct Matchmaker {
    registry: Registry,
}

impl Matchmaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of an identity, if it is active.
    pub fn state_of(&self, id: &str) -> Option<&UserState> {
        self.registry.get(id)
    }

    /// Put `id` into the pairing pool and try to match it.
    ///
    /// Scans current entries for another searching identity; first found
    /// wins, with no fairness guarantee beyond that. On a match both sides
    /// transition to `Chatting` at each other within the same call, so the
    /// symmetry invariant holds at every point the lock is released.
    /// Overwrites any prior state for `id`. Returns the matched partner,
    /// if any.
    pub fn start_search(&mut self, id: &SessionId) -> Option<SessionId> {
        self.registry.set(id.clone(), UserState::Searching);

        let partner = self.registry.iter().find_map(|(other, state)| {
            (*state == UserState::Searching && other != id).then(|| other.clone())
        })?;

        self.registry.set(
            partner.clone(),
            UserState::Chatting { partner: id.clone() },
        );
        self.registry.set(
            id.clone(),
            UserState::Chatting {
                partner: partner.clone(),
            },
        );
        debug!(a = %id, b = %partner, "Paired");
        Some(partner)
    }

    /// Drop `id` from the pairing pool. Affects no other identity.
    pub fn stop_search(&mut self, id: &str) {
        self.registry.remove(id);
    }

    /// Tear down a pairing: both entries are removed.
    ///
    /// Trusts the caller that `partner` is the stored peer of `initiator`;
    /// the symmetry invariant is assumed, not checked.
    pub fn end_dialog(&mut self, initiator: &str, partner: &str) {
        self.registry.remove(initiator);
        self.registry.remove(partner);
        debug!(initiator = %initiator, partner = %partner, "Dialog ended");
    }
}
