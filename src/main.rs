use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use plox::error::ScanError;
use plox::scanner;

#[derive(Parser, Debug)]
#[command(name = "plox", about = "A scanner for the Lox language")]
struct Cli {
    /// Lox source file to scan (omit for REPL)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.file {
        Some(ref path) => run_file(path, &cli.format),
        None => {
            plox::repl::run_repl();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_file(path: &Path, format: &str) -> Result<ExitCode> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;

    let (tokens, diagnostics) = scanner::scan(&source);

    match format {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&tokens).context("serialize tokens to JSON")?
        ),
        _ => {
            for token in &tokens {
                println!("{token}");
            }
        }
    }

    report(&diagnostics);
    // 65 is EX_DATAERR: the file held malformed source.
    match diagnostics.is_empty() {
        true => Ok(ExitCode::SUCCESS),
        false => Ok(ExitCode::from(65)),
    }
}

fn report(diagnostics: &[ScanError]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.display_with_line());
    }
}
