// src/checker/report.rs
// =============================================================================
// This module holds the running tally of a check run.
//
// The AggregateReport keeps, per outcome category, a counter and the list
// of links that landed there. Results arrive in completion order (which is
// not input order), and the lists preserve that arrival order.
//
// Only the dispatcher's single consumer loop mutates the report, through
// record(). Once the run is over the caller owns it as a plain value, so
// no locking is needed anywhere.
// =============================================================================

use serde::Serialize;

use super::outcome::Outcome;

// One category's tally: how many links landed here, and which ones.
//
// `count` always equals `links.len()` - record() moves them in lockstep.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CategoryTally {
    pub count: usize,
    pub links: Vec<String>,
}

// The full report: one tally per outcome category.
//
// Serializes to {"reachable": {...}, "not_found": {...}, "errored": {...}}
// for --json output.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AggregateReport {
    reachable: CategoryTally,
    not_found: CategoryTally,
    errored: CategoryTally,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    // The one mutation path: increment the category's counter and append
    // the link to its list, together.
    pub fn record(&mut self, outcome: Outcome, link: String) {
        let tally = self.tally_mut(outcome);
        tally.count += 1;
        tally.links.push(link);
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.tally(outcome).count
    }

    // Links in the category, in the order they finished
    pub fn links(&self, outcome: Outcome) -> &[String] {
        &self.tally(outcome).links
    }

    // Total links recorded across all three categories.
    // Equals the input size once a run has completed.
    pub fn total(&self) -> usize {
        self.reachable.count + self.not_found.count + self.errored.count
    }

    fn tally(&self, outcome: Outcome) -> &CategoryTally {
        match outcome {
            Outcome::Reachable => &self.reachable,
            Outcome::NotFound => &self.not_found,
            Outcome::Errored => &self.errored,
        }
    }

    fn tally_mut(&mut self, outcome: Outcome) -> &mut CategoryTally {
        match outcome {
            Outcome::Reachable => &mut self.reachable,
            Outcome::NotFound => &mut self.not_found,
            Outcome::Errored => &mut self.errored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = AggregateReport::new();
        assert_eq!(report.total(), 0);
        assert_eq!(report.count(Outcome::Reachable), 0);
        assert_eq!(report.count(Outcome::NotFound), 0);
        assert_eq!(report.count(Outcome::Errored), 0);
    }

    #[test]
    fn test_record_keeps_count_and_list_in_lockstep() {
        let mut report = AggregateReport::new();
        report.record(Outcome::Reachable, "http://a".to_string());
        report.record(Outcome::Reachable, "http://b".to_string());
        report.record(Outcome::Errored, "http://c".to_string());

        assert_eq!(report.count(Outcome::Reachable), 2);
        assert_eq!(report.links(Outcome::Reachable), ["http://a", "http://b"]);
        assert_eq!(report.count(Outcome::Errored), 1);
        assert_eq!(report.links(Outcome::Errored), ["http://c"]);
        assert_eq!(report.count(Outcome::NotFound), 0);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_lists_preserve_arrival_order() {
        let mut report = AggregateReport::new();
        for name in ["z", "m", "a"] {
            report.record(Outcome::NotFound, format!("http://{}", name));
        }
        assert_eq!(
            report.links(Outcome::NotFound),
            ["http://z", "http://m", "http://a"]
        );
    }

    #[test]
    fn test_json_shape() {
        let mut report = AggregateReport::new();
        report.record(Outcome::Reachable, "http://a".to_string());
        report.record(Outcome::NotFound, "http://b".to_string());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["reachable"]["count"], 1);
        assert_eq!(value["reachable"]["links"][0], "http://a");
        assert_eq!(value["not_found"]["count"], 1);
        assert_eq!(value["errored"]["count"], 0);
        assert_eq!(value["errored"]["links"].as_array().unwrap().len(), 0);
    }
}
