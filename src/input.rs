// src/input.rs
// =============================================================================
// Loads the link list the checker will probe.
//
// Links come one per line from a file, or from stdin when no file is
// given. Lines are trimmed, blank lines are skipped, and a UTF-8 BOM is
// stripped - link lists exported from Windows tools often start with one.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

// Reads links from the given file, or from stdin when path is None
pub fn load_links(path: Option<&Path>) -> Result<Vec<String>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Could not read link file '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Could not read links from stdin")?;
            buffer
        }
    };

    Ok(parse_links(&raw))
}

fn parse_links(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_matches('\u{feff}').trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// Writes links one per line, used by --save-ok for the reachable list
pub fn save_links(path: &Path, links: &[String]) -> Result<()> {
    let mut contents = links.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents)
        .with_context(|| format!("Could not write link file '{}'", path.display()))
}
