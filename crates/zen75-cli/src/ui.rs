//! Terminal rendering: ANSI colors, header, checklist, progress bar,
//! streak block.

use zen75_core::checklist::{self, CHECKLIST_ITEMS};
use zen75_core::{DayRecord, StreakRecord};

pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const BLUE: &str = "\x1b[94m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

const BAR_LENGTH: usize = 40;

pub fn green(text: &str) -> String {
    format!("{GREEN}{text}{RESET}")
}

pub fn yellow(text: &str) -> String {
    format!("{YELLOW}{text}{RESET}")
}

pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}

pub fn blue(text: &str) -> String {
    format!("{BLUE}{text}{RESET}")
}

pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

pub fn clear_screen() {
    print!("{CLEAR}");
}

pub fn print_header() {
    println!("{}", bold("\u{1f9d8} 75 Zen - Daily Discipline Tracker"));
    println!("{}", "=".repeat(50));
}

pub fn print_checklist(record: &DayRecord) {
    for (i, (item, checked)) in CHECKLIST_ITEMS.iter().zip(&record.checklist).enumerate() {
        let checkbox = if *checked { "\u{2705}" } else { "\u{2b1c}" };
        let label = format!("{} {}", item.emoji, item.label);
        let colored = if *checked { green(&label) } else { yellow(&label) };
        println!("{}. {} {}", i + 1, checkbox, colored);
    }
}

/// Render the progress bar. Returns (completed, total).
pub fn print_progress_bar(record: &DayRecord) -> (usize, usize) {
    let completed = checklist::completed_count(&record.checklist);
    let total = record.checklist.len();
    let progress = if total > 0 {
        completed as f64 / total as f64
    } else {
        0.0
    };

    println!("\n{}", "\u{2500}".repeat(50));

    let filled = (BAR_LENGTH as f64 * progress) as usize;
    let bar = format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_LENGTH - filled)
    );
    let percentage = (progress * 100.0) as usize;
    println!("Progress: [{bar}] {completed}/{total} ({percentage}%)");

    (completed, total)
}

pub fn print_streak_info(streak: &StreakRecord) {
    println!("{}", "\u{2500}".repeat(50));

    let current = format!("{} days", streak.current);
    let colored = if streak.current > 0 {
        green(&current)
    } else {
        red(&current)
    };
    println!("\u{1f525} Current Streak: {colored}");
    println!(
        "\u{1f3c6} Best Streak: {}",
        blue(&format!("{} days", streak.best))
    );
}

pub fn print_motivational_message(completed: usize, total: usize) {
    if completed == total {
        println!(
            "\n{}",
            green("\u{2728} Perfect day! Keep going! \u{2728}")
        );
    } else if completed > 0 {
        let remaining = total - completed;
        println!(
            "\n{}",
            yellow(&format!("\u{1f4aa} {remaining} more to go! You got this!"))
        );
    } else {
        println!(
            "\n{}",
            red("\u{1f680} Time to start! One task at a time.")
        );
    }
}

pub fn print_interactive_controls() {
    println!("\n{}", bold("Controls:"));
    println!("Press [1-7] to toggle items | [r] reset day | [q] quit");
}

/// Full status block: header, checklist, progress, streak, motivation.
pub fn print_status(record: &DayRecord, streak: &StreakRecord) {
    print_header();
    print_checklist(record);
    let (completed, total) = print_progress_bar(record);
    print_streak_info(streak);
    print_motivational_message(completed, total);
}

/// Heavy section divider used by the gate banners.
pub fn print_gate_banner(title: &str) {
    let rule = "\u{2550}".repeat(50);
    println!("\n{}", bold(&rule));
    println!("{}", bold(title));
    println!("{}", bold(&rule));
    println!();
}

/// Light divider in the given color.
pub fn print_rule(color: &str) {
    println!("{color}{}{RESET}", "\u{2500}".repeat(50));
}
