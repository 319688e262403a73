//! # Assignust
//!
//! A keyboard-driven assignment tracker for the terminal. Assignments live
//! for the duration of a session; each one carries a title and a deadline,
//! and adding one schedules up to two reminders for the deadline day.
//!
//! ## Features
//!
//! - **Session list**: newly added assignments appear at the top of the list.
//! - **Deadline reminders**: a noon heads-up ("due today at 11:59 PM") and a
//!   23:30 final call ("due in 30 minutes") on the deadline day, skipping any
//!   that have already passed when the assignment is added.
//! - **Completion flow**: completing an assignment asks for confirmation,
//!   then removes it and retracts its pending reminders.
//! - **Preview command**: inspect the reminder plan for any deadline without
//!   opening the interactive session, as a table or as JSON.
//! - **Shell completions** for bash, zsh, fish, powershell and elvish.
//!
//! ## Usage
//!
//! Running `assignust` with no arguments (or with `assignust ui`) opens the
//! interactive session.
//!
//! ### Keybindings
//!
//! - `a`: add an assignment (title, then deadline as `YYYY-MM-DD`)
//! - `j`/`k` or arrow keys: move the selection
//! - `Space`/`Enter`: complete the selected assignment (asks y/n)
//! - `q`: quit
//!
//! ### Previewing reminders
//!
//! ```bash
//! assignust preview 2026-09-01
//! assignust preview 2026-09-01 --at "2026-09-01 13:00"
//! assignust preview 2026-09-01 --json
//! ```
//!
//! ### Shell completions
//!
//! ```bash
//! assignust completions bash > ~/.local/share/bash-completion/completions/assignust
//! ```
//!
//! ## Reminders
//!
//! Deadlines are kept exactly as typed. When a deadline parses as
//! `YYYY-MM-DD`, two reminders are placed on that day, at 12:00 and at
//! 23:30 local time; only times still in the future are scheduled. A
//! deadline that does not parse produces no reminders but the assignment is
//! still tracked.
//!
//! ## Logging
//!
//! Diagnostics are written to `~/.local/share/assignust/logs` (override with
//! `ASSIGNUST_LOG_DIR`; level via `RUST_LOG`). The interactive session owns
//! the terminal, so nothing is logged to stderr while it runs.

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use assignust::commands::cmd_preview;
use assignust::logging::init_logging;
use assignust::tui;

#[derive(Parser)]
#[command(name = "assignust")]
#[command(about = "A terminal based assignment tracker with deadline reminders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the reminders a deadline would produce, without scheduling any
    Preview {
        /// Deadline to plan for (YYYY-MM-DD)
        deadline: String,
        /// Evaluate against this time instead of now ("YYYY-MM-DD HH:MM")
        #[arg(long)]
        at: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// The shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Launch the interactive session (default)
    Ui,
}

fn main() {
    // The handle flushes buffered log lines when it is dropped at exit.
    let _logger = match init_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: file logging unavailable: {}", e);
            None
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Preview { deadline, at, json }) => cmd_preview(deadline, at, json),
        Some(Commands::Completions { shell }) => {
            let shell = match shell.to_lowercase().as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "assignust", &mut io::stdout());
        }
        Some(Commands::Ui) | None => {
            if let Err(e) = tui::run_tui() {
                eprintln!("Error running TUI: {}", e);
            }
        }
    }
}
