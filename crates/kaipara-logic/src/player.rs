//! Player position tracking.

use crate::location::LocationId;

/// Where the player currently stands.
///
/// Movement validation lives in [`crate::movement`]; the game layer calls
/// [`Player::move_to`] only after a successful resolution, so this type
/// never inspects the world graph itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    current: LocationId,
}

impl Player {
    /// Start a player at a location, normally the world's starting
    /// location.
    pub fn new(start: LocationId) -> Self {
        Self { current: start }
    }

    pub fn current_location(&self) -> LocationId {
        self.current
    }

    pub fn move_to(&mut self, destination: LocationId) {
        self.current = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    #[test]
    fn tracks_position() {
        let mut world = World::new();
        let a = world.add_location("A", "", true).unwrap();
        let b = world.add_location("B", "", false).unwrap();
        let mut player = Player::new(a);
        assert_eq!(player.current_location(), a);
        player.move_to(b);
        assert_eq!(player.current_location(), b);
    }
}
