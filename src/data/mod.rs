/// Data layer: record types, CSV loading, and grouping by workload.
///
/// Architecture:
/// ```text
///   summary.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ResultsTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ResultsTable  │  Vec<LoadTestRecord>, file order
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  split by Workload → Vec<WorkloadGroup>
///   └──────────┘
/// ```

pub mod group;
pub mod loader;
pub mod model;
