//! Default full-screen interactive loop.
//!
//! Redraws the whole status screen after every keystroke: 1-7 toggle
//! items, `r` resets the day, `q`/Esc/Ctrl-C exit. Raw mode is enabled
//! only around the single-key read so regular printing stays line
//! buffered.

use std::io::{self, Write};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use zen75_core::checklist;
use zen75_core::{DayRecord, DayStore, StreakTracker};

use crate::ui;

enum Key {
    Quit,
    ResetDay,
    Toggle(usize),
    Other,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = DayStore::open()?;
    let tracker = StreakTracker::open()?;

    loop {
        // Recomputed every pass so a session left open overnight rolls
        // onto the new date.
        let today = Local::now().date_naive();
        let record = store.load(today)?;
        let streak = tracker.update(record.all_complete())?;

        ui::clear_screen();
        ui::print_status(&record, &streak);
        ui::print_interactive_controls();
        print!("{} ", ui::yellow(">"));
        io::stdout().flush()?;

        match read_key()? {
            Key::Quit => break,
            Key::ResetDay => {
                store.reset_day(today)?;
                store.save(&DayRecord::new(today))?;
            }
            Key::Toggle(n) => {
                let mut record = store.load(today)?;
                if checklist::toggle(&mut record.checklist, n).is_ok() {
                    store.save(&record)?;
                }
            }
            Key::Other => {}
        }
    }

    println!("\n\u{1f44b} Keep crushing it!");
    Ok(())
}

/// Read one keypress in raw mode.
fn read_key() -> io::Result<Key> {
    enable_raw_mode()?;
    let key = next_key_press();
    disable_raw_mode()?;
    key
}

fn next_key_press() -> io::Result<Key> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        return Ok(match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => Key::ResetDay,
            KeyCode::Char(ch @ '1'..='7') => Key::Toggle(ch as usize - '0' as usize),
            _ => Key::Other,
        });
    }
}
