//! The world graph: a location arena, a name index, and wiring operations.
//!
//! A world is built once at startup by scripted initializer code and is
//! read-mostly afterwards. Exits may be overwritten but locations are
//! never removed, so [`LocationId`] handles stay valid for the life of
//! the world.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::direction;
use crate::error::WorldError;
use crate::location::{Location, LocationId};

/// Owns every location and tracks where the player starts.
#[derive(Debug, Clone, Default)]
pub struct World {
    arena: Vec<Location>,
    by_name: HashMap<String, LocationId>,
    starting: Option<LocationId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location and register it under its name.
    ///
    /// Names are unique: adding a name twice returns
    /// [`WorldError::DuplicateLocation`] rather than silently replacing
    /// the first entry, since exits already pointing at the original would
    /// otherwise keep referencing an orphaned location.
    ///
    /// With `is_starting` the new location also becomes the starting
    /// location. Returns the new location's id for follow-up wiring.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        is_starting: bool,
    ) -> Result<LocationId, WorldError> {
        let location = Location::new(name, description)?;
        if self.by_name.contains_key(location.name()) {
            return Err(WorldError::DuplicateLocation(location.name().to_string()));
        }
        let id = LocationId(self.arena.len() as u32);
        self.by_name.insert(location.name().to_string(), id);
        self.arena.push(location);
        if is_starting {
            self.starting = Some(id);
        }
        Ok(id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.arena.get(id.0 as usize)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.arena.get_mut(id.0 as usize)
    }

    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    pub fn get_location(&self, name: &str) -> Option<&Location> {
        self.location(self.location_id(name)?)
    }

    pub fn has_location(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered locations.
    pub fn location_count(&self) -> usize {
        self.arena.len()
    }

    /// Iterate over every location with its id.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(index, location)| (LocationId(index as u32), location))
    }

    pub fn starting_location(&self) -> Option<LocationId> {
        self.starting
    }

    /// Unconditionally overwrite the starting location.
    ///
    /// Membership is not checked here; initializers call this with an id
    /// this world just issued.
    pub fn set_starting_location(&mut self, id: LocationId) {
        self.starting = Some(id);
    }

    /// One-way wiring by name, for passages that should not get an
    /// automatic return exit.
    pub fn add_exit(
        &mut self,
        from: &str,
        direction: impl Into<String>,
        to: &str,
    ) -> Result<(), WorldError> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        self.arena[from_id.0 as usize].add_exit(direction, to_id)
    }

    /// Bidirectional wiring by name.
    ///
    /// Adds an exit from `name_a` to `name_b` in `direction` and, when
    /// `direction` is one of the eight compass points, a reverse exit from
    /// `name_b` back to `name_a` in the opposite direction. A direction
    /// outside the compass table ("up", a custom label) gets no reverse
    /// exit: the connection stays one-way despite being requested through
    /// the bidirectional API. Callers wanting a return passage for such
    /// labels wire it explicitly with [`World::add_exit`].
    ///
    /// Both names must already be registered.
    pub fn connect_locations(
        &mut self,
        name_a: &str,
        name_b: &str,
        direction: &str,
    ) -> Result<(), WorldError> {
        let a = self.require(name_a)?;
        let b = self.require(name_b)?;
        self.arena[a.0 as usize].add_exit(direction, b)?;
        if let Some(reverse) = direction::opposite(direction) {
            self.arena[b.0 as usize].add_exit(reverse, a)?;
        }
        Ok(())
    }

    /// Breadth-first reachability check.
    ///
    /// True iff every registered location can be reached from the starting
    /// location by following outgoing exits. The check is directed: an
    /// incoming exit does not make a location reachable unless some chain
    /// of outgoing exits leads to it. An empty world or one with no
    /// starting location is not connected.
    pub fn is_fully_connected(&self) -> bool {
        let Some(start) = self.starting else {
            return false;
        };
        if self.arena.is_empty() || self.location(start).is_none() {
            return false;
        }
        let mut visited: HashSet<LocationId> = HashSet::new();
        let mut frontier: VecDeque<LocationId> = VecDeque::new();
        visited.insert(start);
        frontier.push_back(start);
        while let Some(id) = frontier.pop_front() {
            if let Some(location) = self.location(id) {
                for next in location.destinations() {
                    if visited.insert(next) {
                        frontier.push_back(next);
                    }
                }
            }
        }
        visited.len() == self.location_count()
    }

    fn require(&self, name: &str) -> Result<LocationId, WorldError> {
        self.location_id(name)
            .ok_or_else(|| WorldError::LocationNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::COMPASS_POINTS;

    /// World with the given names, first one as the start.
    fn world_with(names: &[&str]) -> World {
        let mut world = World::new();
        for (index, name) in names.iter().enumerate() {
            world.add_location(*name, "", index == 0).unwrap();
        }
        world
    }

    // --- Registration and lookup ---

    #[test]
    fn add_and_look_up() {
        let world = world_with(&["Helensville", "Parakai"]);
        assert_eq!(world.location_count(), 2);
        assert!(world.has_location("Parakai"));
        assert!(!world.has_location("Taupaki"));
        assert_eq!(world.get_location("Helensville").unwrap().name(), "Helensville");
        assert!(world.get_location("Taupaki").is_none());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut world = world_with(&["Kumeu"]);
        let err = world.add_location("Kumeu", "again", false).unwrap_err();
        assert_eq!(err, WorldError::DuplicateLocation("Kumeu".to_string()));
        assert_eq!(world.location_count(), 1);
    }

    #[test]
    fn starting_location_tracked_and_overwritable() {
        let mut world = World::new();
        assert_eq!(world.starting_location(), None);
        let a = world.add_location("A", "", true).unwrap();
        assert_eq!(world.starting_location(), Some(a));
        let b = world.add_location("B", "", false).unwrap();
        world.set_starting_location(b);
        assert_eq!(world.starting_location(), Some(b));
    }

    // --- Wiring ---

    #[test]
    fn connect_requires_both_names() {
        let mut world = world_with(&["A"]);
        let err = world.connect_locations("A", "B", "north").unwrap_err();
        assert_eq!(err, WorldError::LocationNotFound("B".to_string()));
        let err = world.connect_locations("Z", "A", "north").unwrap_err();
        assert_eq!(err, WorldError::LocationNotFound("Z".to_string()));
        // Failed wiring must not leave half a connection behind.
        assert!(world.get_location("A").unwrap().available_exits().is_empty());
    }

    #[test]
    fn compass_connections_are_symmetric() {
        for dir in COMPASS_POINTS {
            let mut world = world_with(&["A", "B"]);
            world.connect_locations("A", "B", dir).unwrap();
            let a = world.location_id("A").unwrap();
            let b = world.location_id("B").unwrap();
            let reverse = crate::direction::opposite(dir).unwrap();
            assert_eq!(world.get_location("A").unwrap().exit(dir), Some(b));
            assert_eq!(world.get_location("B").unwrap().exit(reverse), Some(a));
        }
    }

    #[test]
    fn non_compass_connection_is_one_way() {
        let mut world = world_with(&["A", "B"]);
        world.connect_locations("A", "B", "up").unwrap();
        let b = world.location_id("B").unwrap();
        assert_eq!(world.get_location("A").unwrap().exit("up"), Some(b));
        assert!(world.get_location("B").unwrap().available_exits().is_empty());
    }

    #[test]
    fn add_exit_is_one_way() {
        let mut world = world_with(&["A", "B"]);
        world.add_exit("A", "north", "B").unwrap();
        let b = world.location_id("B").unwrap();
        assert_eq!(world.get_location("A").unwrap().exit("north"), Some(b));
        assert!(world.get_location("B").unwrap().available_exits().is_empty());
    }

    #[test]
    fn reconnect_overwrites_direction() {
        let mut world = world_with(&["A", "B", "C"]);
        world.connect_locations("A", "B", "north").unwrap();
        world.connect_locations("A", "C", "north").unwrap();
        let c = world.location_id("C").unwrap();
        assert_eq!(world.get_location("A").unwrap().exit("north"), Some(c));
        // B keeps its stale reverse exit; overwriting does not rewire it.
        let a = world.location_id("A").unwrap();
        assert_eq!(world.get_location("B").unwrap().exit("south"), Some(a));
    }

    // --- Connectivity ---

    #[test]
    fn empty_world_not_connected() {
        assert!(!World::new().is_fully_connected());
    }

    #[test]
    fn no_starting_location_not_connected() {
        let mut world = World::new();
        world.add_location("A", "", false).unwrap();
        assert!(!world.is_fully_connected());
    }

    #[test]
    fn singleton_with_start_connected() {
        let world = world_with(&["A"]);
        assert!(world.is_fully_connected());
    }

    #[test]
    fn disconnected_island_detected() {
        let mut world = world_with(&["A", "B", "C"]);
        world.connect_locations("A", "B", "north").unwrap();
        assert!(!world.is_fully_connected());
    }

    #[test]
    fn directed_ring_connected_from_any_start() {
        let names = ["R0", "R1", "R2", "R3", "R4"];
        for start in names {
            let mut world = world_with(&names);
            for index in 0..names.len() {
                let next = names[(index + 1) % names.len()];
                world.add_exit(names[index], "onward", next).unwrap();
            }
            let id = world.location_id(start).unwrap();
            world.set_starting_location(id);
            assert!(world.is_fully_connected(), "ring from {}", start);
        }
    }

    #[test]
    fn incoming_exit_alone_is_not_reachability() {
        // C points at A, but nothing points at C.
        let mut world = world_with(&["A", "B", "C"]);
        world.connect_locations("A", "B", "north").unwrap();
        world.add_exit("C", "west", "A").unwrap();
        assert!(!world.is_fully_connected());
    }

    #[test]
    fn self_loop_does_not_stall_traversal() {
        let mut world = world_with(&["A", "B"]);
        world.add_exit("A", "around", "A").unwrap();
        world.connect_locations("A", "B", "east").unwrap();
        assert!(world.is_fully_connected());
    }
}
