//! Compass vocabulary for the world graph.
//!
//! Direction labels are free-form strings in the general model. The eight
//! compass points below are the canonical vocabulary that bidirectional
//! wiring knows how to reverse; anything else ("up", a custom label) can
//! still be used for one-way exits but has no automatic return direction.

/// The eight compass-point labels.
pub mod compass {
    pub const NORTH: &str = "north";
    pub const SOUTH: &str = "south";
    pub const EAST: &str = "east";
    pub const WEST: &str = "west";
    pub const NORTHEAST: &str = "northeast";
    pub const NORTHWEST: &str = "northwest";
    pub const SOUTHEAST: &str = "southeast";
    pub const SOUTHWEST: &str = "southwest";
}

/// All compass points, clockwise from north.
pub const COMPASS_POINTS: [&str; 8] = [
    compass::NORTH,
    compass::NORTHEAST,
    compass::EAST,
    compass::SOUTHEAST,
    compass::SOUTH,
    compass::SOUTHWEST,
    compass::WEST,
    compass::NORTHWEST,
];

/// Canonical reverse of a compass point.
///
/// Returns `None` for anything outside the eight-point vocabulary, which
/// therefore cannot be auto-reversed.
pub fn opposite(direction: &str) -> Option<&'static str> {
    match direction {
        compass::NORTH => Some(compass::SOUTH),
        compass::SOUTH => Some(compass::NORTH),
        compass::EAST => Some(compass::WEST),
        compass::WEST => Some(compass::EAST),
        compass::NORTHEAST => Some(compass::SOUTHWEST),
        compass::SOUTHWEST => Some(compass::NORTHEAST),
        compass::NORTHWEST => Some(compass::SOUTHEAST),
        compass::SOUTHEAST => Some(compass::NORTHWEST),
        _ => None,
    }
}

/// Check if a label is one of the eight compass points.
pub fn is_compass_point(direction: &str) -> bool {
    opposite(direction).is_some()
}

/// Expand a direction abbreviation (n, s, e, w, ne, nw, se, sw) to its
/// full compass point.
pub fn expand(abbrev: &str) -> Option<&'static str> {
    match abbrev {
        "n" => Some(compass::NORTH),
        "s" => Some(compass::SOUTH),
        "e" => Some(compass::EAST),
        "w" => Some(compass::WEST),
        "ne" => Some(compass::NORTHEAST),
        "nw" => Some(compass::NORTHWEST),
        "se" => Some(compass::SOUTHEAST),
        "sw" => Some(compass::SOUTHWEST),
        _ => None,
    }
}

/// Normalize raw player input into a canonical direction string: trim,
/// lowercase, expand abbreviations. Unknown words pass through lowercased
/// so custom exit labels keep working. Exit lookups match the normalized
/// string exactly; this is the only place normalization happens.
pub fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    match expand(&lower) {
        Some(full) => full.to_string(),
        None => lower,
    }
}
