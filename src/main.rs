// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the link list (file or stdin)
// 3. Run the concurrent check and time it
// 4. Print the summary (text or JSON), optionally save the reachable list
// 5. Exit with proper code (0 = all reachable, 1 = some weren't, 2 = error)
//
// All the interesting coordination lives in the checker module; this file
// is the thin I/O shell around it.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker;       // src/checker/ - the concurrent fetch-and-classify engine
mod cli;           // src/cli.rs - command-line parsing
mod input;         // src/input.rs - link list loading and saving
mod progress;      // src/progress.rs - progress bar for non-verbose runs

use checker::{AggregateReport, Outcome};
use clap::Parser;
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use std::time::{Duration, Instant};

// The #[tokio::main] attribute transforms our async main into a real main
// function that sets up the runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Configuration or I/O problems land here, before or after the
            // run - never individual link failures (those are report data)
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Main application logic
// Returns:
//   Ok(0) = every link was reachable
//   Ok(1) = at least one link was not found or errored
//   Err = configuration or I/O error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let links = input::load_links(cli.file.as_deref())?;

    let start = Instant::now();
    let report = checker::check_links(
        links,
        cli.concurrency,
        cli.verbose,
        Duration::from_secs(cli.timeout),
    )
    .await?;
    let elapsed = start.elapsed();

    if let Some(path) = &cli.save_ok {
        input::save_links(path, report.links(Outcome::Reachable))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        final_report(&report, elapsed);
    }

    if report.total() == report.count(Outcome::Reachable) {
        Ok(0) // Everything answered 200 (trivially true for an empty list)
    } else {
        Ok(1)
    }
}

// Prints the summary block shown after a text-mode run
//
// Not-found and error lines only appear when those counts are nonzero,
// so the common all-good run stays short.
fn final_report(report: &AggregateReport, elapsed: Duration) {
    println!("{}", "-".repeat(20));
    println!("{} link(s) tested.", report.total());
    println!("{} link(s) ok.", report.count(Outcome::Reachable));
    if report.count(Outcome::NotFound) > 0 {
        println!("{} not found.", report.count(Outcome::NotFound));
    }
    if report.count(Outcome::Errored) > 0 {
        println!("{} error(s).", report.count(Outcome::Errored));
    }
    println!("Elapsed time: {:.2}s", elapsed.as_secs_f64());
}
