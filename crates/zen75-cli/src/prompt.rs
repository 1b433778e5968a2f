//! Line-oriented prompts for the wizards.
//!
//! All prompts read from stdin; end-of-input yields an empty answer so a
//! keyboard interrupt or closed pipe abandons the current prompt instead
//! of wedging the wizard.

use std::io::{self, Write};

use zen75_core::gates;

use crate::ui;

/// Print `prompt: ` and read one trimmed line.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Like [`read_line`], but an empty answer falls back to the default.
pub fn read_line_default(prompt: &str, default: &str) -> io::Result<String> {
    print!("{prompt} [{default}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let value = line.trim();
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    })
}

/// Prompt for a 1-10 rating, re-asking once on invalid input.
///
/// Returns None when the second answer is still invalid; the call site
/// abandons the wizard.
pub fn read_rating(prompt: &str, field: &str) -> io::Result<Option<u8>> {
    for attempt in 0..2 {
        let answer = read_line(prompt)?;
        match answer.parse::<u8>().ok().and_then(|n| gates::validate_rating(field, n).ok()) {
            Some(rating) => return Ok(Some(rating)),
            None if attempt == 0 => {
                println!("{}", ui::red("Invalid input. Must be a number 1-10."));
            }
            None => {}
        }
    }
    Ok(None)
}

/// Yes/no confirmation with a default answer.
pub fn confirm(prompt: &str, default_yes: bool) -> io::Result<bool> {
    let default = if default_yes { "y" } else { "n" };
    let answer = read_line_default(prompt, default)?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Wait for Enter.
pub fn wait_for_enter(message: &str) -> io::Result<()> {
    println!("{message}");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
