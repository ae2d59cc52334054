//! Pure game-world logic for Kaipara, a text adventure set in the
//! countryside north-west of Auckland.
//!
//! This crate contains all game logic that is independent of any console,
//! terminal, or runtime. Functions take plain data and return results,
//! making them unit-testable and portable between the interactive client
//! and the headless validation harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`command`] | Player input parsing (movement, look, help, quit) |
//! | [`direction`] | Compass vocabulary, opposites, abbreviation expansion |
//! | [`display`] | Location description formatting for the console |
//! | [`error`] | Error taxonomy for world construction |
//! | [`location`] | A named node in the world graph with directional exits |
//! | [`messages`] | User-facing feedback text templates |
//! | [`movement`] | Exit resolution for player movement attempts |
//! | [`player`] | Player position tracking |
//! | [`validate`] | World-graph validation (reachability, exit symmetry) |
//! | [`world`] | Location arena, wiring, and connectivity checking |
//! | [`worldgen`] | The scripted north-west Auckland world map |

pub mod command;
pub mod direction;
pub mod display;
pub mod error;
pub mod location;
pub mod messages;
pub mod movement;
pub mod player;
pub mod validate;
pub mod world;
pub mod worldgen;
