//! Kaipara: a text adventure in the north-west Auckland countryside.
//!
//! Reads commands from stdin, resolves them against the world graph, and
//! prints feedback. World construction failures are fatal: a half-built
//! world cannot pass the connectivity check, so the process logs the
//! problem and exits instead of starting the loop.
//!
//! Usage:
//!   cargo run -p kaipara-game
//!   RUST_LOG=warn cargo run -p kaipara-game   # show validation warnings

use std::io::{self, BufRead, Write};
use std::process;

use kaipara_logic::command::{self, Command};
use kaipara_logic::display;
use kaipara_logic::messages;
use kaipara_logic::movement;
use kaipara_logic::player::Player;
use kaipara_logic::validate::{self, Severity};
use kaipara_logic::world::World;
use kaipara_logic::worldgen;

mod help;

fn main() {
    env_logger::init();

    let world = match worldgen::northwest_auckland() {
        Ok(world) => world,
        Err(err) => {
            log::error!("world construction failed: {}", err);
            process::exit(1);
        }
    };

    let findings = validate::validate_all(&world);
    for finding in &findings {
        match finding.severity {
            Severity::Error => log::error!("[{}] {}", finding.category, finding.message),
            Severity::Warning => log::warn!("[{}] {}", finding.category, finding.message),
        }
    }
    if validate::has_errors(&findings) {
        log::error!("world failed validation, refusing to start");
        process::exit(1);
    }

    let Some(start) = world.starting_location() else {
        // Unreachable after validation, but the loop must not start
        // without a position.
        log::error!("world has no starting location");
        process::exit(1);
    };

    println!("{}", help::welcome());
    run(&world, Player::new(start));
    println!("{}", messages::FAREWELL);
}

/// The read-eval-print loop. Returns on quit or end of input.
fn run(world: &World, mut player: Player) {
    print_location(world, &player);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or a dead pipe ends the session
            Ok(_) => {}
        }

        match command::parse(&line) {
            Command::Go(direction) => {
                let outcome = movement::resolve(world, player.current_location(), &direction);
                println!("{}", outcome.message());
                if let Some(destination) = outcome.destination() {
                    player.move_to(destination);
                    print_location(world, &player);
                }
            }
            Command::Look => print_location(world, &player),
            Command::Help => println!("{}", help::help_text()),
            Command::Quit => break,
            Command::Empty => println!("{}", messages::EMPTY_INPUT),
            Command::Unknown(raw) => println!("{}", messages::unknown_command(&raw)),
        }
    }
}

fn print_location(world: &World, player: &Player) {
    if let Some(location) = world.location(player.current_location()) {
        println!("\n{}", display::location_info(location));
    }
}
