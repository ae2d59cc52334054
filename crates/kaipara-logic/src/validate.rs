//! World-graph validation.
//!
//! Pure functions that inspect a built world and report problems before
//! the game loop starts. Findings carry category/severity/message so the
//! harness can print or serialize them; `Error` findings make the world
//! unsafe to run and should abort startup.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::direction;
use crate::world::World;

/// A validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

// ── A. Starting location ────────────────────────────────────────────────

/// Check that a starting location is set and registered.
pub fn check_starting_location(world: &World) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    match world.starting_location() {
        None => errors.push(ValidationError {
            category: "starting_location",
            severity: Severity::Error,
            message: "world has no starting location".to_string(),
        }),
        Some(id) if world.location(id).is_none() => errors.push(ValidationError {
            category: "starting_location",
            severity: Severity::Error,
            message: "starting location id does not belong to this world".to_string(),
        }),
        Some(_) => {}
    }
    errors
}

// ── B. Connectivity (graph-level) ───────────────────────────────────────

/// Check that every location is reachable from the start.
///
/// Re-runs the BFS rather than calling `is_fully_connected` so the
/// finding can name the unreached locations.
pub fn check_reachability(world: &World) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(start) = world.starting_location() else {
        return errors; // reported by the starting-location check
    };
    if world.location(start).is_none() {
        return errors;
    }

    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();
    visited.insert(start);
    frontier.push_back(start);
    while let Some(id) = frontier.pop_front() {
        if let Some(location) = world.location(id) {
            for next in location.destinations() {
                if visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
    }

    let unreached: Vec<&str> = world
        .locations()
        .filter(|(id, _)| !visited.contains(id))
        .map(|(_, location)| location.name())
        .collect();

    if !unreached.is_empty() {
        errors.push(ValidationError {
            category: "connectivity",
            severity: Severity::Error,
            message: format!(
                "{} of {} locations unreachable from the start (e.g. {})",
                unreached.len(),
                world.location_count(),
                unreached[0]
            ),
        });
    }
    errors
}

// ── C. Exit shape (per-location) ────────────────────────────────────────

/// Warn about compass exits with no matching return exit.
///
/// One-way compass passages are legal but usually indicate an overwritten
/// or forgotten reverse connection. Custom labels are expected to be
/// one-way and are not flagged.
pub fn check_exit_symmetry(world: &World) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (id, location) in world.locations() {
        for dir in location.available_exits() {
            let Some(reverse) = direction::opposite(dir) else {
                continue;
            };
            let Some(dest_id) = location.exit(dir) else {
                continue;
            };
            let Some(dest) = world.location(dest_id) else {
                continue;
            };
            if dest.exit(reverse) != Some(id) {
                errors.push(ValidationError {
                    category: "symmetry",
                    severity: Severity::Warning,
                    message: format!(
                        "{} has a {} exit to {} with no {} exit back",
                        location.name(),
                        dir,
                        dest.name(),
                        reverse
                    ),
                });
            }
        }
    }
    errors
}

/// Warn about locations the player could enter but never leave.
pub fn check_dead_ends(world: &World) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (_, location) in world.locations() {
        if location.available_exits().is_empty() {
            errors.push(ValidationError {
                category: "dead_end",
                severity: Severity::Warning,
                message: format!("{} has no exits", location.name()),
            });
        }
    }
    errors
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all world validations and return combined results.
pub fn validate_all(world: &World) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_starting_location(world));
    all.extend(check_reachability(world));
    all.extend(check_exit_symmetry(world));
    all.extend(check_dead_ends(world));
    all
}

/// True iff any finding is `Error` severity.
pub fn has_errors(findings: &[ValidationError]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}
