use clap::Parser;
use mission_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Mission Analyzer - Spaceflight Launch Dataset Analysis");
    println!("======================================================");
    println!();
    println!("Parse spaceflight launch CSV datasets and compute mission counts,");
    println!("success rates, rankings, status tallies, and yearly trends.");
    println!();
    println!("USAGE:");
    println!("    mission-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Produce a full analysis report over a filtered view");
    println!("    query       Run a single query operation and print its result");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Full report over the whole dataset:");
    println!("    mission-analyzer analyze --input space_missions.csv");
    println!();
    println!("    # Report over one company's 2020 launches, as JSON:");
    println!("    mission-analyzer analyze --input space_missions.csv --company SpaceX \\");
    println!("                             --start-date 2020-01-01 --end-date 2020-12-31 \\");
    println!("                             --format json");
    println!();
    println!("    # Single queries:");
    println!("    mission-analyzer query success-rate --input space_missions.csv --company SpaceX");
    println!("    mission-analyzer query top-companies --input space_missions.csv -n 5");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mission-analyzer <COMMAND> --help");
}
