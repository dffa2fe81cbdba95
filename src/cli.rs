use std::path::Path;

use crate::catalog::generate::{generate_catalog, DEFAULT_FILMS_ROOT, DEFAULT_OUTPUT_PATH};
use crate::catalog::validate::validate_films;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("generate") => Some(Command::Generate),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Generate) => handle_generate(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: narwhal <generate|validate> [root] [output]");
            2
        }
    }
}

fn handle_generate(args: &[String]) -> i32 {
    let root = args.get(2).map(String::as_str).unwrap_or(DEFAULT_FILMS_ROOT);
    let output = args
        .get(3)
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUTPUT_PATH);

    match generate_catalog(Path::new(root), Path::new(output)) {
        Ok(report) => {
            for dir in &report.skipped {
                println!(
                    "Film located at '{}' lacks a `film-info.json` file, skipping...",
                    dir.display()
                );
            }
            println!(
                "catalog written: records={}, output='{}'",
                report.records_written, report.output_path
            );
            0
        }
        Err(err) => {
            eprintln!("generate failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let root = args.get(2).map(String::as_str).unwrap_or(DEFAULT_FILMS_ROOT);

    match validate_films(Path::new(root)) {
        Ok(report) => {
            for diag in &report.diagnostics {
                println!("{}: {}: {}", diag.severity, diag.context, diag.message);
            }
            if report.has_errors() {
                eprintln!("validation failed: {} error(s)", report.error_count());
                1
            } else {
                println!("validation passed: {root}");
                0
            }
        }
        Err(err) => {
            eprintln!("validation aborted: {err}");
            1
        }
    }
}
