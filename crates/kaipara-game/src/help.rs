//! Help text and the welcome banner.

const RULE: &str = "==================================================";

/// Command reference shown for the `help` command.
pub fn help_text() -> String {
    let mut lines = vec![
        RULE.to_string(),
        "AVAILABLE COMMANDS".to_string(),
        RULE.to_string(),
        String::new(),
        "Movement:".to_string(),
    ];
    for (cmd, what) in [
        ("north (n)", "Move north"),
        ("south (s)", "Move south"),
        ("east (e)", "Move east"),
        ("west (w)", "Move west"),
        ("northeast (ne)", "Move northeast"),
        ("northwest (nw)", "Move northwest"),
        ("southeast (se)", "Move southeast"),
        ("southwest (sw)", "Move southwest"),
        ("go <direction>", "Move in any direction"),
    ] {
        lines.push(format!("  {:<16} - {}", cmd, what));
    }
    lines.push(String::new());
    lines.push("Other:".to_string());
    for (cmd, what) in [
        ("look", "Look around the current location"),
        ("help", "Show this message"),
        ("quit", "Leave the game"),
    ] {
        lines.push(format!("  {:<16} - {}", cmd, what));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Banner printed once at startup.
pub fn welcome() -> String {
    [
        RULE,
        "Welcome to Kaipara, a north-west Auckland adventure!",
        RULE,
        "",
        "You find yourself in the countryside north-west of Auckland.",
        "Type 'help' at any time to see the available commands.",
    ]
    .join("\n")
}
