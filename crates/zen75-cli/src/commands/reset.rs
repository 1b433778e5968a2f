use chrono::Local;
use zen75_core::{DayRecord, DayStore, StreakTracker};

use crate::{prompt, ui};

/// Delete today's files and recreate the blank pair.
pub fn run_reset_day() -> Result<(), Box<dyn std::error::Error>> {
    let store = DayStore::open()?;
    let today = Local::now().date_naive();

    store.reset_day(today)?;
    store.save(&DayRecord::new(today))?;

    println!(
        "{}",
        ui::yellow("\u{1f4dd} Today's checklist has been reset.")
    );
    Ok(())
}

/// Manual streak reset behind a y/N confirmation.
pub fn run_force_reset() -> Result<(), Box<dyn std::error::Error>> {
    let sure = prompt::confirm(
        &ui::yellow("Are you sure you want to reset your streak? (y/N)"),
        false,
    )?;
    if !sure {
        println!("Streak reset cancelled.");
        return Ok(());
    }

    StreakTracker::open()?.force_reset()?;
    println!("{}", ui::red("\u{1f504} Streak has been reset to 0."));
    Ok(())
}
