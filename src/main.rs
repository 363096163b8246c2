use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use lexical_analyzer::{errors::errors::LexicalError, init_tracing, render_error, Analysis, LexicalAnalyzer};
use serde_json::json;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Scans a source file and prints its token stream and symbol tables.
#[derive(Parser)]
#[command(name = "lexan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The source file to scan.
    file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let file_contents = read_to_string(&cli.file)?;
    let file_name = cli.file.to_string_lossy();

    let start = Instant::now();
    let mut analyzer = LexicalAnalyzer::new();
    let result = analyzer.run(&file_contents);
    info!(elapsed = ?start.elapsed(), "scanned {}", file_name);

    match (cli.format, result) {
        (Format::Json, Ok(analysis)) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "ok": true, "analysis": analysis }))?);
            Ok(true)
        }
        (Format::Json, Err(errors)) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "ok": false, "errors": errors }))?);
            Ok(false)
        }
        (Format::Text, Ok(analysis)) => {
            print_analysis(&analysis);
            Ok(true)
        }
        (Format::Text, Err(errors)) => {
            print_errors(&errors, &file_name, &file_contents);
            Ok(false)
        }
    }
}

fn print_analysis(analysis: &Analysis) {
    println!("Tokens:");
    println!("{:>4} {:>4} {:<12} {:>4} {:>4}", "id", "line", "text", "code", "idx");
    for token in &analysis.tokens {
        println!("{}", token);
    }

    println!("\nIdentifiers:");
    for ident in &analysis.identifiers {
        println!("{:>4} {:<12} {}", ident.index, ident.name, ident.declared_type);
    }

    println!("\nConstants:");
    for constant in &analysis.constants {
        println!("{:>4} {}", constant.index, constant.spelling);
    }

    println!("\nLabels:");
    for label in &analysis.labels {
        println!(
            "{:>4} {:<12} from {:>3} to {:>3}",
            label.index,
            label.name,
            line_or_unset(label.line_from),
            line_or_unset(label.line_to)
        );
    }
}

fn print_errors(errors: &[LexicalError], file: &str, contents: &str) {
    for error in errors {
        print!("{}", render_error(error, file, contents));
    }

    println!("{} error(s) found", errors.len());
}

fn line_or_unset(line: Option<u32>) -> i64 {
    line.map_or(-1, i64::from)
}
