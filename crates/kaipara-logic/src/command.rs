//! Player input parsing.
//!
//! Accepts `go <direction>`, bare compass directions and their
//! abbreviations, and the look/help/quit commands. Input is trimmed and
//! lowercased before matching; direction words are run through
//! [`direction::normalize`] so the movement resolver only ever sees
//! canonical labels.

use crate::direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move in a normalized direction.
    Go(String),
    /// Describe the current location.
    Look,
    /// Show the command reference.
    Help,
    /// Leave the game.
    Quit,
    /// Input was blank.
    Empty,
    /// Anything else, carried verbatim for the error message.
    Unknown(String),
}

/// Parse one line of player input.
///
/// Bare words move only when they are compass points or abbreviations;
/// the `go <word>` form accepts any label, so custom exits like "up"
/// remain reachable.
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let lower = trimmed.to_lowercase();

    if let Some(rest) = lower.strip_prefix("go ") {
        let word = rest.trim();
        if word.is_empty() {
            return Command::Unknown(trimmed.to_string());
        }
        return Command::Go(direction::normalize(word));
    }

    let expanded = direction::normalize(&lower);
    if direction::is_compass_point(&expanded) {
        return Command::Go(expanded);
    }

    match lower.as_str() {
        "look" => Command::Look,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_form_with_full_direction() {
        assert_eq!(parse("go north"), Command::Go("north".to_string()));
        assert_eq!(parse("GO  SOUTH "), Command::Go("south".to_string()));
    }

    #[test]
    fn go_form_expands_abbreviations() {
        assert_eq!(parse("go ne"), Command::Go("northeast".to_string()));
        assert_eq!(parse("go W"), Command::Go("west".to_string()));
    }

    #[test]
    fn go_form_passes_custom_labels_through() {
        assert_eq!(parse("go up"), Command::Go("up".to_string()));
    }

    #[test]
    fn bare_compass_words_move() {
        assert_eq!(parse("north"), Command::Go("north".to_string()));
        assert_eq!(parse("sw"), Command::Go("southwest".to_string()));
        assert_eq!(parse("  E  "), Command::Go("east".to_string()));
    }

    #[test]
    fn bare_non_compass_words_do_not_move() {
        assert_eq!(parse("up"), Command::Unknown("up".to_string()));
    }

    #[test]
    fn single_word_commands() {
        assert_eq!(parse("look"), Command::Look);
        assert_eq!(parse(" HELP "), Command::Help);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn blank_and_unknown_input() {
        assert_eq!(parse(""), Command::Empty);
        assert_eq!(parse("   \t"), Command::Empty);
        assert_eq!(parse("dance"), Command::Unknown("dance".to_string()));
        assert_eq!(parse("go"), Command::Unknown("go".to_string()));
        // Original casing is preserved for the echo message.
        assert_eq!(parse("Dance Wildly"), Command::Unknown("Dance Wildly".to_string()));
    }
}
