//! Interactive confirmation prompts.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm};

/// Prompt theme.
pub fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Whether a human can answer prompts (stdin and stderr are terminals).
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Yes/no prompt. Esc or Ctrl+C counts as "no".
///
/// # Errors
///
/// Returns an error if the prompt cannot read from or write to the terminal.
pub fn yes_no_prompt(prompt: &str, default: bool) -> anyhow::Result<bool> {
    let answer = Confirm::with_theme(&theme())
        .with_prompt(prompt)
        .default(default)
        .interact_opt()?;
    Ok(answer.unwrap_or(false))
}
