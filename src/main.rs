use clap::Parser;
use columbus_csv::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - results have already been reported by the command
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
    println!("Columbus CSV - V-900 GPS Logger Track Converter");
    println!("===============================================");
    println!();
    println!("Convert native Columbus V-900 CSV track logs into a normalized track");
    println!("and waypoint model with linked audio recordings.");
    println!();
    println!("USAGE:");
    println!("    columbus-csv <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert track files (main command)");
    println!("    probe       Check whether files are V-900 track logs");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a track file and show the import summary:");
    println!("    columbus-csv convert trip.csv");
    println!();
    println!("    # Convert several files and write the normalized models as JSON:");
    println!("    columbus-csv convert --output ./converted 1.csv 2.csv 3.csv");
    println!();
    println!("    # Check files before importing:");
    println!("    columbus-csv probe *.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    columbus-csv <COMMAND> --help");
}
