//! Kaipara headless world harness.
//!
//! Builds the north-west Auckland world and sweeps the logic crate's
//! behavior without a terminal attached. Runs entirely in-process, with
//! no stdin and no rendering.
//!
//! Usage:
//!   cargo run -p kaipara-simtest
//!   cargo run -p kaipara-simtest -- --verbose
//!   cargo run -p kaipara-simtest -- --json

use std::collections::{HashSet, VecDeque};

use kaipara_logic::command::{self, Command};
use kaipara_logic::direction::{self, COMPASS_POINTS};
use kaipara_logic::movement;
use kaipara_logic::validate::{self, Severity};
use kaipara_logic::world::World;
use kaipara_logic::worldgen;
use serde::Serialize;

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn result(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");

    let world = match worldgen::northwest_auckland() {
        Ok(world) => world,
        Err(err) => {
            eprintln!("world construction failed: {}", err);
            std::process::exit(1);
        }
    };

    let mut results = Vec::new();

    // 1. World shape
    results.extend(check_world_shape(&world));

    // 2. Validation sweep
    results.extend(check_validation(&world));

    // 3. Compass table consistency
    results.extend(check_compass_table());

    // 4. Full-map movement walk
    results.extend(check_movement_walk(&world));

    // 5. Parser sweep
    results.extend(check_parser());

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                eprintln!("failed to serialize report: {}", err);
                std::process::exit(1);
            }
        }
    } else {
        println!("=== Kaipara World Harness ===\n");
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }
        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed,
            results.len(),
            failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. World shape ──────────────────────────────────────────────────────

fn check_world_shape(world: &World) -> Vec<TestResult> {
    let mut results = Vec::new();

    results.push(result(
        "world_populated",
        world.location_count() == 9,
        format!("{} locations", world.location_count()),
    ));

    let start_name = world
        .starting_location()
        .and_then(|id| world.location(id))
        .map(|location| location.name().to_string());
    results.push(result(
        "starting_location",
        start_name.as_deref() == Some(worldgen::STARTING_LOCATION),
        format!("start = {:?}", start_name),
    ));

    results.push(result(
        "fully_connected",
        world.is_fully_connected(),
        "all locations reachable from the start".into(),
    ));

    results
}

// ── 2. Validation sweep ─────────────────────────────────────────────────

fn check_validation(world: &World) -> Vec<TestResult> {
    let findings = validate::validate_all(world);
    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    vec![result(
        "validation_sweep",
        errors == 0,
        format!("{} errors, {} warnings", errors, warnings),
    )]
}

// ── 3. Compass table ────────────────────────────────────────────────────

fn check_compass_table() -> Vec<TestResult> {
    let mut results = Vec::new();

    let involution = COMPASS_POINTS.iter().all(|&dir| {
        direction::opposite(dir).and_then(direction::opposite) == Some(dir)
    });
    results.push(result(
        "opposite_involution",
        involution,
        "opposite(opposite(d)) == d for all eight points".into(),
    ));

    let abbrevs = ["n", "s", "e", "w", "ne", "nw", "se", "sw"];
    let expanded: HashSet<&str> = abbrevs.iter().filter_map(|a| direction::expand(a)).collect();
    results.push(result(
        "abbreviations_cover_compass",
        expanded.len() == COMPASS_POINTS.len(),
        format!("{} of {} points reachable by abbreviation", expanded.len(), COMPASS_POINTS.len()),
    ));

    results
}

// ── 4. Movement walk ────────────────────────────────────────────────────

/// BFS the generated map through the movement resolver: every listed exit
/// must resolve, and the walk must cover the whole world.
fn check_movement_walk(world: &World) -> Vec<TestResult> {
    let mut results = Vec::new();
    let Some(start) = world.starting_location() else {
        return vec![result("movement_walk", false, "no starting location".into())];
    };

    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();
    let mut resolved = 0usize;
    let mut broken: Vec<String> = Vec::new();
    visited.insert(start);
    frontier.push_back(start);

    while let Some(id) = frontier.pop_front() {
        let Some(location) = world.location(id) else {
            continue;
        };
        for dir in location.available_exits() {
            let outcome = movement::resolve(world, id, dir);
            match outcome.destination() {
                Some(next) => {
                    resolved += 1;
                    if visited.insert(next) {
                        frontier.push_back(next);
                    }
                }
                None => broken.push(format!("{} -> {}", location.name(), dir)),
            }
        }
    }

    results.push(result(
        "exits_resolve",
        broken.is_empty(),
        if broken.is_empty() {
            format!("{} exits resolved", resolved)
        } else {
            format!("broken exits: {}", broken.join(", "))
        },
    ));

    results.push(result(
        "walk_covers_world",
        visited.len() == world.location_count(),
        format!("visited {} of {}", visited.len(), world.location_count()),
    ));

    results
}

// ── 5. Parser sweep ─────────────────────────────────────────────────────

fn check_parser() -> Vec<TestResult> {
    let cases: Vec<(&str, Command)> = vec![
        ("go north", Command::Go("north".into())),
        ("go NE", Command::Go("northeast".into())),
        ("n", Command::Go("north".into())),
        ("SW", Command::Go("southwest".into())),
        ("go up", Command::Go("up".into())),
        ("look", Command::Look),
        ("help", Command::Help),
        ("quit", Command::Quit),
        ("exit", Command::Quit),
        ("", Command::Empty),
        ("dance", Command::Unknown("dance".into())),
        ("up", Command::Unknown("up".into())),
    ];

    let mismatches: Vec<String> = cases
        .iter()
        .filter(|(input, expected)| command::parse(input) != *expected)
        .map(|(input, _)| format!("{:?}", input))
        .collect();

    vec![result(
        "parser_sweep",
        mismatches.is_empty(),
        if mismatches.is_empty() {
            format!("{} inputs parsed as expected", cases.len())
        } else {
            format!("mismatched inputs: {}", mismatches.join(", "))
        },
    )]
}
