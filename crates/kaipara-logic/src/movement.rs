//! Exit resolution for movement attempts.
//!
//! Resolution is pure: the world graph is never mutated, and a missing
//! exit is an ordinary outcome rather than an error. The caller updates
//! the player's position only after a [`MoveOutcome::Moved`] result.

use crate::location::LocationId;
use crate::messages;
use crate::world::World;

/// Result of asking to move in a direction from a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The exit exists; the caller should move the player to `destination`.
    Moved {
        destination: LocationId,
        message: String,
    },
    /// No exit that way. The player stays put.
    Blocked { message: String },
}

impl MoveOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn destination(&self) -> Option<LocationId> {
        match self {
            MoveOutcome::Moved { destination, .. } => Some(*destination),
            MoveOutcome::Blocked { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            MoveOutcome::Moved { message, .. } | MoveOutcome::Blocked { message } => message,
        }
    }
}

/// Resolve a movement attempt from `from` in `direction`.
///
/// `direction` is expected to be normalized already (lowercased, trimmed,
/// abbreviations expanded; see [`crate::direction::normalize`]); matching
/// against exits is exact.
pub fn resolve(world: &World, from: LocationId, direction: &str) -> MoveOutcome {
    let destination = world
        .location(from)
        .and_then(|location| location.exit(direction));
    if let Some(id) = destination {
        if let Some(target) = world.location(id) {
            return MoveOutcome::Moved {
                destination: id,
                message: messages::move_success(direction, target.name()),
            };
        }
    }
    MoveOutcome::Blocked {
        message: messages::move_blocked(direction),
    }
}

/// True iff the location has an exit in the (already normalized) direction.
pub fn is_valid_direction(world: &World, from: LocationId, direction: &str) -> bool {
    world
        .location(from)
        .map(|location| location.has_exit(direction))
        .unwrap_or(false)
}
