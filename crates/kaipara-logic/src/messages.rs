//! User-facing feedback text.
//!
//! Centralizing the templates keeps wording consistent between the
//! interactive client and the validation harness.

/// Successful move: "You move north to Parakai."
pub fn move_success(direction: &str, destination: &str) -> String {
    format!("You move {} to {}.", direction, destination)
}

/// Blocked move: "You cannot go south from here."
pub fn move_blocked(direction: &str) -> String {
    format!("You cannot go {} from here.", direction)
}

/// Unrecognized input, echoed back with a pointer at the help command.
pub fn unknown_command(raw: &str) -> String {
    format!("I don't understand '{}'. {}", raw, HELP_SUGGESTION)
}

pub const EMPTY_INPUT: &str = "Please enter a command.";
pub const HELP_SUGGESTION: &str = "Type 'help' for a list of available commands.";
pub const FAREWELL: &str = "Thanks for playing! Goodbye!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_embed_their_arguments() {
        assert_eq!(
            move_success("north", "Parakai"),
            "You move north to Parakai."
        );
        assert_eq!(move_blocked("south"), "You cannot go south from here.");
        assert!(unknown_command("dance").contains("'dance'"));
        assert!(unknown_command("dance").contains("help"));
    }
}
