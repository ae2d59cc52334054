//! A named node in the world graph.
//!
//! Locations are owned by a [`World`](crate::world::World) arena and refer
//! to each other through [`LocationId`] handles rather than references, so
//! cyclic maps (A exits to B, B exits back to A, self-loops) need no
//! special handling and the whole world drops cleanly.

use std::collections::HashMap;

use crate::error::WorldError;

/// Arena handle for a location.
///
/// Issued by `World::add_location` and only meaningful within the world
/// that issued it. Locations are never removed, so a handle stays valid
/// for the life of its world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub(crate) u32);

/// A place the player can stand: a name, a description, and exits keyed
/// by direction label.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    description: String,
    exits: HashMap<String, LocationId>,
}

impl Location {
    /// Create a location. The name must be non-empty and is immutable
    /// afterwards; the description may be empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, WorldError> {
        let name = name.into();
        if name.is_empty() {
            return Err(WorldError::EmptyLocationName);
        }
        Ok(Self {
            name,
            description: description.into(),
            exits: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register an exit, overwriting any previous exit in that direction.
    /// Last write wins. Only this location is mutated; the destination
    /// never learns about incoming exits.
    pub fn add_exit(
        &mut self,
        direction: impl Into<String>,
        destination: LocationId,
    ) -> Result<(), WorldError> {
        let direction = direction.into();
        if direction.is_empty() {
            return Err(WorldError::EmptyDirection);
        }
        self.exits.insert(direction, destination);
        Ok(())
    }

    /// Destination in the given direction, if any.
    ///
    /// Matching is exact and case-sensitive; callers normalize input first
    /// (see [`crate::direction::normalize`]).
    pub fn exit(&self, direction: &str) -> Option<LocationId> {
        self.exits.get(direction).copied()
    }

    pub fn has_exit(&self, direction: &str) -> bool {
        self.exits.contains_key(direction)
    }

    /// All registered exit directions, sorted for stable output.
    pub fn available_exits(&self) -> Vec<&str> {
        let mut directions: Vec<&str> = self.exits.keys().map(String::as_str).collect();
        directions.sort_unstable();
        directions
    }

    /// Exit destinations, in no particular order.
    pub fn destinations(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.exits.values().copied()
    }
}
