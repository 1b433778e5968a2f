use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod prompt;
mod ui;

#[derive(Parser)]
#[command(
    name = "75z",
    version,
    about = "75 Zen - Minimalist CLI tracker for daily discipline"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's checklist and streak
    Status,
    /// Toggle a checklist item
    Check {
        /// Item number (1-7)
        item: usize,
    },
    /// Morning check: state clarity and focus
    Morning,
    /// Gated evening review of the day
    Review,
    /// Clear and recreate today's checklist
    #[command(name = "reset_day")]
    ResetDay,
    /// Manually reset the streak counter
    #[command(name = "force_reset")]
    ForceReset,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Some(Commands::Status) => commands::status::run(),
        Some(Commands::Check { item }) => commands::check::run(item),
        Some(Commands::Morning) => commands::morning::run(),
        Some(Commands::Review) => commands::review::run(),
        Some(Commands::ResetDay) => commands::reset::run_reset_day(),
        Some(Commands::ForceReset) => commands::reset::run_force_reset(),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "75z", &mut std::io::stdout());
            Ok(())
        }
        // No subcommand: the interactive loop.
        None => commands::interactive::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
