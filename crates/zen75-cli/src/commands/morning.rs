//! Morning check: state clarity and the day's focus.

use chrono::Local;
use zen75_core::DayStore;

use crate::{prompt, ui};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = DayStore::open()?;
    let today = Local::now().date_naive();
    let mut record = store.load(today)?;

    if let Some(state) = record.state {
        println!("State: {state}/10");
        println!("Focus: {}", record.focus.as_deref().unwrap_or(""));
        println!("\n{} Morning check already set\n", ui::green("\u{2713}"));
        return Ok(());
    }

    println!("{}", ui::bold("Morning check:"));
    let Some(state) = prompt::read_rating("State (1-10)", "state")? else {
        println!("{}", ui::yellow("Morning check abandoned."));
        return Ok(());
    };

    let mut focus = prompt::read_line("Focus today")?;
    if focus.is_empty() {
        // One re-ask on an empty answer.
        focus = prompt::read_line("Focus today")?;
    }

    record.state = Some(state);
    record.focus = (!focus.is_empty()).then_some(focus);
    store.save(&record)?;

    println!("\n{} Set\n", ui::green("\u{2713}"));
    Ok(())
}
