use chrono::Local;
use zen75_core::checklist::{self, CHECKLIST_ITEMS};
use zen75_core::{CoreError, DayStore};

use crate::ui;

pub fn run(item: usize) -> Result<(), Box<dyn std::error::Error>> {
    let store = DayStore::open()?;
    let today = Local::now().date_naive();
    let mut record = store.load(today)?;

    let checked = checklist::toggle(&mut record.checklist, item).map_err(CoreError::from)?;
    store.save(&record)?;

    let def = &CHECKLIST_ITEMS[item - 1];
    let status = if checked {
        "\u{2705} Completed"
    } else {
        "\u{2b1c} Unchecked"
    };
    println!("{}: {} {}", ui::green(status), def.emoji, def.label);
    Ok(())
}
