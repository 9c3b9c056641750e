//! filescope - Main binary entry point

use filescope::cli::args::{OutputFormat, parse_args};
use filescope::cli::output::{format_json, format_text};
use filescope::{AnalysisOutcome, AnalyzeOptions};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug filescope data.csv
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            println!("filescope {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let opts = AnalyzeOptions {
        quality_level: cli_args.quality_level.clone(),
    };

    let outcome = match filescope::analyze_file(&cli_args.path, &opts) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(4);
        }
    };

    let rendered = match cli_args.format {
        OutputFormat::Pretty => format_json(&outcome, false),
        OutputFormat::Compact => format_json(&outcome, true),
        OutputFormat::Text => Ok(format_text(&outcome)),
    };

    match rendered {
        Ok(text) if cli_args.format == OutputFormat::Text => print!("{text}"),
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize report for {}: {e}", cli_args.path);
            eprintln!("Error: failed to serialize report: {e}");
            process::exit(4);
        }
    }

    if let AnalysisOutcome::Failed(_) = outcome {
        process::exit(3);
    }
}

fn print_help() {
    println!("filescope - Inspect a single file and emit a metadata report");
    println!();
    println!("USAGE:");
    println!("    filescope <PATH> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --level <TAG>     Quality level label copied into the report (default: full)");
    println!("    --compact         Emit single-line JSON");
    println!("    --text            Emit a short human-readable summary");
    println!("    -h, --help        Show this help message");
    println!("    -v, --version     Show version information");
    println!();
    println!("EXIT CODES:");
    println!("    0  report produced");
    println!("    2  invalid arguments");
    println!("    3  file not found (failure record is still printed)");
    println!("    4  file could not be read or the report could not be serialized");
    println!();
    println!("EXAMPLES:");
    println!("    filescope data/records.csv");
    println!("    filescope src/main.py --level quick --compact");
    println!("    RUST_LOG=debug filescope config.json --text");
}
