use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LoadTestRecord, ResultsTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("results file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to open results file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("results file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed CSV header")]
    Header(#[source] csv::Error),

    #[error("data row {row} could not be parsed")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a load-test summary file.
///
/// CSV layout: a header row naming at least `Workload`, `Threads`,
/// `AvgThroughput` and `AvgResponseTime`. Columns are matched by name, so
/// their order does not matter and extra columns are ignored. Rows are kept
/// in file order.
pub fn load_csv(path: &Path) -> Result<ResultsTable, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_records(file)
}

/// Parse summary records from any reader. Split out of [`load_csv`] so the
/// column and cell handling can be exercised without touching the filesystem.
pub fn read_records<R: io::Read>(input: R) -> Result<ResultsTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for required in LoadTestRecord::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<LoadTestRecord>().enumerate() {
        let record = result.map_err(|source| LoadError::Parse {
            row: idx + 1,
            source,
        })?;
        records.push(record);
    }

    log::debug!("loaded {} load-test records", records.len());
    Ok(ResultsTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_rows_in_file_order() {
        let csv = "Workload,Threads,AvgThroughput,AvgResponseTime\n\
                   A,1,100,10\n\
                   A,2,190,12.5\n\
                   B,1,80,9\n";
        let table = read_records(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        let summary: Vec<(&str, u32, f64, f64)> = table
            .records
            .iter()
            .map(|r| (r.workload.as_str(), r.threads, r.avg_throughput, r.avg_response_time))
            .collect();
        assert_eq!(
            summary,
            vec![("A", 1, 100.0, 10.0), ("A", 2, 190.0, 12.5), ("B", 1, 80.0, 9.0)]
        );
    }

    #[test]
    fn columns_are_matched_by_name() {
        let csv = "AvgResponseTime,Extra,Threads,Workload,AvgThroughput\n\
                   10,ignored,4,MIXED,321.5\n";
        let table = read_records(csv.as_bytes()).unwrap();

        let r = &table.records[0];
        assert_eq!(r.workload, "MIXED");
        assert_eq!(r.threads, 4);
        assert_eq!(r.avg_throughput, 321.5);
        assert_eq!(r.avg_response_time, 10.0);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Workload,Threads,AvgThroughput\nA,1,100\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("AvgResponseTime")));
    }

    #[test]
    fn empty_input_lacks_every_column() {
        let err = read_records("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Workload")));
    }

    #[test]
    fn non_integer_threads_is_a_parse_error() {
        let csv = "Workload,Threads,AvgThroughput,AvgResponseTime\n\
                   A,1,100,10\n\
                   A,two,190,12\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { row: 2, .. }), "got {err:?}");
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let csv = "Workload,Threads,AvgThroughput,AvgResponseTime\n";
        let table = read_records(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn absent_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(p) if p == path));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        std::fs::write(
            &path,
            "Workload,Threads,AvgThroughput,AvgResponseTime\nGET_ALL,8,1500.25,5.3\n",
        )
        .unwrap();

        let table = load_csv(&path).unwrap();
        assert_eq!(table.records[0].workload, "GET_ALL");
        assert_eq!(table.records[0].threads, 8);
    }
}
