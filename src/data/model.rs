use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// LoadTestRecord – one row of summary.csv
// ---------------------------------------------------------------------------

/// Aggregated result of one load-test run: a workload at a given client count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadTestRecord {
    #[serde(rename = "Workload")]
    pub workload: String,
    /// Number of concurrent clients (generator threads).
    #[serde(rename = "Threads")]
    pub threads: u32,
    /// Successful requests per second.
    #[serde(rename = "AvgThroughput")]
    pub avg_throughput: f64,
    /// Mean latency of successful requests, in milliseconds.
    #[serde(rename = "AvgResponseTime")]
    pub avg_response_time: f64,
}

impl LoadTestRecord {
    /// Column names every summary file must carry.
    pub const REQUIRED_COLUMNS: [&'static str; 4] =
        ["Workload", "Threads", "AvgThroughput", "AvgResponseTime"];
}

// ---------------------------------------------------------------------------
// Metric – the two dependent variables we chart
// ---------------------------------------------------------------------------

/// A per-run measurement plotted against client count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Throughput,
    ResponseTime,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Throughput, Metric::ResponseTime];

    pub fn value(&self, record: &LoadTestRecord) -> f64 {
        match self {
            Metric::Throughput => record.avg_throughput,
            Metric::ResponseTime => record.avg_response_time,
        }
    }

    pub fn x_label(&self) -> &'static str {
        "Number of Clients (Threads)"
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::Throughput => "Average Throughput (requests/sec)",
            Metric::ResponseTime => "Average Response Time (ms)",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Throughput => "Number of Clients vs Throughput",
            Metric::ResponseTime => "Number of Clients vs Average Response Time",
        }
    }

    /// File name of the rendered chart inside the plots directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Metric::Throughput => "clients_vs_throughput.png",
            Metric::ResponseTime => "clients_vs_response_time.png",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Throughput => write!(f, "throughput"),
            Metric::ResponseTime => write!(f, "response time"),
        }
    }
}

// ---------------------------------------------------------------------------
// ResultsTable – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of a summary file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    pub records: Vec<LoadTestRecord>,
}

impl ResultsTable {
    pub fn new(records: Vec<LoadTestRecord>) -> Self {
        ResultsTable { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// WorkloadGroup – rows sharing one Workload label
// ---------------------------------------------------------------------------

/// The rows of a single workload, borrowed from the table in file order.
#[derive(Debug, Clone)]
pub struct WorkloadGroup<'a> {
    pub workload: &'a str,
    pub records: Vec<&'a LoadTestRecord>,
}

impl WorkloadGroup<'_> {
    /// `(threads, value)` pairs for one metric, ready to plot.
    pub fn points(&self, metric: Metric) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.threads as f64, metric.value(r)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(workload: &str, threads: u32, tput: f64, rt: f64) -> LoadTestRecord {
        LoadTestRecord {
            workload: workload.to_string(),
            threads,
            avg_throughput: tput,
            avg_response_time: rt,
        }
    }

    #[test]
    fn points_follow_selected_metric() {
        let rows = [record("A", 1, 100.0, 10.0), record("A", 2, 190.0, 12.0)];
        let group = WorkloadGroup {
            workload: "A",
            records: rows.iter().collect(),
        };

        assert_eq!(group.points(Metric::Throughput), vec![(1.0, 100.0), (2.0, 190.0)]);
        assert_eq!(group.points(Metric::ResponseTime), vec![(1.0, 10.0), (2.0, 12.0)]);
    }

    #[test]
    fn metrics_write_to_distinct_files() {
        assert_ne!(Metric::Throughput.file_name(), Metric::ResponseTime.file_name());
        assert_eq!(Metric::Throughput.x_label(), Metric::ResponseTime.x_label());
    }
}
