//! The north-west Auckland world map.
//!
//! Nine locations in the countryside between the Kaipara Harbour and the
//! Waitakere foothills, wired so that every place is reachable from the
//! starting town of Helensville. Wiring is scripted and deterministic;
//! the world is rebuilt from this code on every process start.

use crate::error::WorldError;
use crate::world::World;

/// Name of the starting location.
pub const STARTING_LOCATION: &str = "Helensville";

/// Build the north-west Auckland world.
pub fn northwest_auckland() -> Result<World, WorldError> {
    let mut world = World::new();

    world.add_location(
        "Helensville",
        "A historic town on the banks of the Kaipara River, known for its hot pools and rural atmosphere.",
        true,
    )?;
    world.add_location(
        "Parakai",
        "A small settlement famous for the Parakai Springs hot pools.",
        false,
    )?;
    world.add_location(
        "Kumeu",
        "The heart of Auckland's wine country.",
        false,
    )?;
    world.add_location(
        "Huapai",
        "A charming village in the wine region, neighboring Kumeu.",
        false,
    )?;
    world.add_location(
        "Waimauku",
        "A rural township connecting the wine region to the west coast.",
        false,
    )?;
    world.add_location(
        "Muriwai Beach",
        "A wild west coast beach famous for its black sand, surf, and gannet colony.",
        false,
    )?;
    world.add_location(
        "Riverhead",
        "A historic wharf town on the upper Waitemata Harbour.",
        false,
    )?;
    world.add_location(
        "Coatesville",
        "A rural settlement with lifestyle blocks and scenic countryside views.",
        false,
    )?;
    world.add_location(
        "Wainui",
        "A coastal settlement near the entrance to the Kaipara Harbour.",
        false,
    )?;

    // State Highway 16 spine
    world.connect_locations("Helensville", "Parakai", "north")?;
    world.connect_locations("Helensville", "Kumeu", "south")?;
    world.connect_locations("Kumeu", "Huapai", "west")?;

    // Wine country out to the west coast
    world.connect_locations("Waimauku", "Kumeu", "southeast")?;
    world.connect_locations("Muriwai Beach", "Waimauku", "east")?;

    // Upper harbour side
    world.connect_locations("Kumeu", "Riverhead", "east")?;
    world.connect_locations("Riverhead", "Coatesville", "southeast")?;

    // Kaipara coast
    world.connect_locations("Helensville", "Wainui", "west")?;

    Ok(world)
}
