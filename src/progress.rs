// src/progress.rs
// =============================================================================
// Progress reporting for non-verbose runs.
//
// The checking engine only knows about the ProgressSink trait: one tick()
// per completed link. The bar itself lives out here so the engine can be
// tested with a no-op sink, and a broken terminal can never take down a
// run (indicatif degrades to drawing nothing).
// =============================================================================

use indicatif::ProgressBar;

// One tick per completed unit of work. Purely observational: a sink must
// not block and has no way to influence results.
pub trait ProgressSink {
    fn tick(&self);
}

// Sink that does nothing. Used in verbose mode (per-link lines replace the
// bar) and in tests.
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn tick(&self) {}
}

// Terminal progress bar over the whole batch.
pub struct BarSink {
    bar: ProgressBar,
}

impl BarSink {
    // `total` is the number of links in the batch
    pub fn new(total: usize) -> Self {
        Self {
            bar: ProgressBar::new(total as u64),
        }
    }

    // Draws the final state and releases the terminal line
    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl ProgressSink for BarSink {
    fn tick(&self) {
        self.bar.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_accepts_ticks() {
        let sink = NoopSink;
        for _ in 0..100 {
            sink.tick();
        }
    }

    #[test]
    fn test_bar_sink_tracks_position() {
        let sink = BarSink::new(3);
        sink.tick();
        sink.tick();
        assert_eq!(sink.bar.position(), 2);
        sink.finish();
    }
}
