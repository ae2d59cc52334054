//! Error taxonomy for world construction.
//!
//! Everything here is a structural mistake made while building a world,
//! fatal at startup. A movement attempt that finds no exit is a normal
//! gameplay outcome, reported through
//! [`MoveOutcome`](crate::movement::MoveOutcome), never through this enum.

use thiserror::Error;

/// A world-construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Location names identify arena entries and cannot be blank.
    #[error("location name must be a non-empty string")]
    EmptyLocationName,
    /// Exit directions are map keys and cannot be blank.
    #[error("exit direction must be a non-empty string")]
    EmptyDirection,
    /// A wiring call referenced a name that was never added. Locations must
    /// be added before they are connected.
    #[error("no location named `{0}` in this world")]
    LocationNotFound(String),
    /// `add_location` was called twice with the same name.
    #[error("a location named `{0}` is already registered")]
    DuplicateLocation(String),
}
