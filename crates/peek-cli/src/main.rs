//! peek CLI - view, compare and open files from other branches and commits.

use clap::Parser;

mod commands;
mod output;
mod render;
mod services;
mod terminal;

use commands::utils::Reported;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);
    output::set_verbose(cli.verbose);

    let result = match cli.command {
        Commands::View { file, branch } => commands::view::run(file.as_deref(), branch),
        Commands::Compare { file, branch } => commands::compare::run(file.as_deref(), branch),
        Commands::Search { branch, file } => commands::search::run(branch, file),
        Commands::Commit { file, commit } => commands::commit::run(file.as_deref(), commit),
        Commands::Branches { json } => commands::list::run_branches(json),
        Commands::Files { reference, json } => commands::list::run_files(&reference, json),
        Commands::History { file, json } => commands::list::run_history(&file, json),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        // Action failures were already shown through the host
        if !e.is::<Reported>() {
            output::error(&format!("{e:#}"));
        }
        std::process::exit(1);
    }
}
