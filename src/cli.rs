// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// a Rust struct and attributes. clap generates the parsing code, --help,
// and --version for us.
//
// The tool does one thing, so there are no subcommands: give it a link
// list (file or stdin) and it tells you which links still answer.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-triage",
    version = "0.1.0",
    about = "Tests a batch of HTTP(S) links and reports which are reachable",
    long_about = "link-triage probes every link in a list with one GET each, under a bounded \
                  number of concurrent requests, and sorts them into reachable, not found, \
                  and errored. Feed it a file with one link per line, or pipe the list in."
)]
pub struct Cli {
    /// File with one link per line (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Number of concurrent requests (minimum 2)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub concurrency: usize,

    /// Print a result line per link instead of a progress bar
    #[arg(short, long)]
    pub verbose: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Print the final report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the reachable links to this file, one per line
    #[arg(long, value_name = "PATH")]
    pub save_ok: Option<PathBuf>,
}
