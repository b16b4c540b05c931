// src/checker/dispatch.rs
// =============================================================================
// The concurrent checking engine.
//
// How a run works:
// 1. Validate the concurrency setting (must be at least 2)
// 2. Turn every link into a future that probes it once via the Fetcher
// 3. Drive those futures with buffer_unordered(n) - at most n requests
//    are in flight at any moment, and completions come out as they happen,
//    not in input order
// 4. A single consumer loop classifies each completion, prints or ticks
//    progress, and folds it into the AggregateReport
//
// Per-link failures never escape their unit: a dead host or a timeout
// becomes an Errored entry in the report and the run keeps going. Nothing
// is retried - every link is attempted exactly once.
//
// Because one loop consumes every completion, the report needs no locks:
// the loop is the only writer, and it owns the report until the run ends.
// =============================================================================

use anyhow::{bail, Result};
use futures::stream::{self, StreamExt};
use std::time::Duration;

use super::fetch::{Fetcher, HttpFetcher};
use super::outcome::classify;
use super::report::AggregateReport;
use crate::progress::{BarSink, NoopSink, ProgressSink};

// Checks a batch of links over HTTP and returns the aggregated outcome.
//
// Parameters:
//   links: the batch to probe, one GET each (not deduplicated, not parsed)
//   concurrency: max simultaneous requests, must be >= 2
//   verbose: print a line per link instead of driving a progress bar
//   timeout: per-request ceiling so one dead host can't hold a slot forever
//
// The only error this returns is a configuration error, raised before any
// request is issued. Everything that goes wrong per link is data, not an
// error: it lands in the report's errored category.
pub async fn check_links(
    links: Vec<String>,
    concurrency: usize,
    verbose: bool,
    timeout: Duration,
) -> Result<AggregateReport> {
    ensure_concurrency(concurrency)?;

    let fetcher = HttpFetcher::new(timeout)?;

    if verbose {
        check_links_with(&fetcher, &NoopSink, links, concurrency, true).await
    } else {
        let bar = BarSink::new(links.len());
        let report = check_links_with(&fetcher, &bar, links, concurrency, false).await?;
        bar.finish();
        Ok(report)
    }
}

// The engine proper, generic over the two capabilities it consumes.
//
// Production goes through check_links() above; tests call this directly
// with a scripted fetcher and a no-op sink, so no test opens a socket.
pub async fn check_links_with<F, P>(
    fetcher: &F,
    progress: &P,
    links: Vec<String>,
    concurrency: usize,
    verbose: bool,
) -> Result<AggregateReport>
where
    F: Fetcher,
    P: ProgressSink,
{
    ensure_concurrency(concurrency)?;

    let mut report = AggregateReport::new();

    // One future per link. Each future carries its link through the probe
    // so the consumer loop below knows which link a completion belongs to.
    let probes = links.into_iter().map(|link| async move {
        let fetched = fetcher.get(&link).await;
        (link, fetched)
    });

    // buffer_unordered(n) is the concurrency budget: it keeps at most n
    // probes running and yields each (link, result) pair as it completes.
    let mut completions = stream::iter(probes).buffer_unordered(concurrency);

    // The single consumer loop. Everything that touches the report happens
    // here, one completion at a time.
    while let Some((link, fetched)) = completions.next().await {
        let (outcome, diagnostic) = classify(&fetched);

        if verbose {
            println!("{} {}", link, outcome.short_status());
            if let Some(message) = &diagnostic {
                println!("*** Error for {}: {}", link, message);
            }
        } else {
            progress.tick();
        }

        report.record(outcome, link);
    }

    Ok(report)
}

// The configuration gate: a budget below 2 is either pointless (1 would be
// a sequential run) or broken (0 would never run anything).
fn ensure_concurrency(concurrency: usize) -> Result<()> {
    if concurrency < 2 {
        bail!("concurrency must be at least 2 (got {})", concurrency);
    }
    Ok(())
}
