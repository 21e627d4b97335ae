use std::error::Error;

use clap::{Parser, Subcommand};

mod commands;

use commands::{classify, diagnose};

#[derive(Parser, Debug)]
#[command(name = "mfd-cli", about = "Frequency-based machine fault diagnosis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Diagnose measured frequencies against a fault-signature catalog.
    Diagnose(diagnose::DiagnoseArgs),
    /// Classify a signature text and show the typical frequencies it implies.
    Classify(classify::ClassifyArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Diagnose(args) => diagnose::run(&args),
        Command::Classify(args) => classify::run(&args),
    }
}
