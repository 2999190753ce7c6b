mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payment::PaymentArgs;
use commands::schedule::ScheduleArgs;

/// Fixed-rate loan amortization calculator
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Fixed-rate loan amortization calculator",
    long_about = "Computes the level monthly payment, total interest and the \
                  month-by-month repayment schedule of a fixed-rate loan with \
                  decimal precision, and renders a principal vs. interest chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the payment, totals, schedule and chart of a loan
    Schedule(ScheduleArgs),
    /// Compute only the level monthly payment
    Payment(PaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args, &cli.output),
        Commands::Payment(args) => commands::payment::run_payment(args)
            .map(|value| output::format_output(&cli.output, &value)),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
