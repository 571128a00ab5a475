use super::model::{ResultsTable, WorkloadGroup};

// ---------------------------------------------------------------------------
// Grouping by workload
// ---------------------------------------------------------------------------

/// Partition the table by `Workload`.
///
/// Groups appear in order of each label's first occurrence; rows inside a
/// group keep file order. Nothing is sorted: summary files list each
/// workload's runs by ascending thread count already.
pub fn group_by_workload(table: &ResultsTable) -> Vec<WorkloadGroup<'_>> {
    let mut groups: Vec<WorkloadGroup<'_>> = Vec::new();

    for record in &table.records {
        match groups.iter_mut().find(|g| g.workload == record.workload) {
            Some(group) => group.records.push(record),
            None => groups.push(WorkloadGroup {
                workload: &record.workload,
                records: vec![record],
            }),
        }
    }

    groups
}

/// Distinct workload labels in first-occurrence order.
pub fn workload_names<'a>(groups: &[WorkloadGroup<'a>]) -> Vec<&'a str> {
    groups.iter().map(|g| g.workload).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LoadTestRecord;
    use pretty_assertions::assert_eq;

    fn table(rows: &[(&str, u32)]) -> ResultsTable {
        ResultsTable::new(
            rows.iter()
                .map(|&(w, t)| LoadTestRecord {
                    workload: w.to_string(),
                    threads: t,
                    avg_throughput: t as f64 * 10.0,
                    avg_response_time: 1.0,
                })
                .collect(),
        )
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let t = table(&[("PUT_ALL", 1), ("GET_ALL", 1), ("PUT_ALL", 2), ("MIXED", 1), ("GET_ALL", 2)]);
        let groups = group_by_workload(&t);

        assert_eq!(workload_names(&groups), vec!["PUT_ALL", "GET_ALL", "MIXED"]);
        let put_threads: Vec<u32> = groups[0].records.iter().map(|r| r.threads).collect();
        assert_eq!(put_threads, vec![1, 2]);
    }

    #[test]
    fn rows_keep_file_order_even_when_unsorted() {
        let t = table(&[("A", 4), ("A", 1), ("A", 2)]);
        let groups = group_by_workload(&t);

        let threads: Vec<u32> = groups[0].records.iter().map(|r| r.threads).collect();
        assert_eq!(threads, vec![4, 1, 2]);
    }

    #[test]
    fn empty_table_has_no_groups() {
        assert!(group_by_workload(&ResultsTable::default()).is_empty());
    }
}
