use chrono::Local;
use zen75_core::{DayStore, StreakTracker};

use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = DayStore::open()?;
    let today = Local::now().date_naive();
    let record = store.load(today)?;

    let streak = StreakTracker::open()?.update(record.all_complete())?;

    ui::print_status(&record, &streak);
    println!();
    Ok(())
}
