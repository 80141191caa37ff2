use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::analyzers::export::{StudentTotal, convert_scores_to_array};
use crate::analyzers::grade::{StudentGrades, grade_all_students};
use crate::analyzers::pass_fail::students_passing_all;
use crate::stats::{SubjectStats, calculate_subject_statistics};
use crate::student::{StudentRecord, Subject};

/// Every derived view of a record set, serialized as a single JSON document.
#[derive(Debug, Serialize)]
pub struct StudentReport {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub passing_score: i64,
    pub statistics: BTreeMap<Subject, SubjectStats>,
    pub grades: Vec<StudentGrades>,
    pub passed_all: BTreeSet<String>,
    pub pass_counts: BTreeMap<Subject, usize>,
    pub table_shape: (usize, usize),
    pub totals: Vec<StudentTotal>,
}

/// Runs every analysis over `records` against the same passing score.
pub fn build_report(records: &[StudentRecord], passing_score: i64) -> StudentReport {
    let summary = students_passing_all(records, passing_score);
    let (table, totals) = convert_scores_to_array(records);

    debug!(
        records = records.len(),
        passed_all = summary.passed_all.len(),
        "Built student report"
    );

    StudentReport {
        generated_at: Utc::now(),
        record_count: records.len(),
        passing_score,
        statistics: calculate_subject_statistics(records),
        grades: grade_all_students(records),
        passed_all: summary.passed_all,
        pass_counts: summary.pass_counts,
        table_shape: table.shape(),
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::pass_fail::DEFAULT_PASSING_SCORE;

    #[test]
    fn test_build_report_empty() {
        let report = build_report(&[], DEFAULT_PASSING_SCORE);

        assert_eq!(report.record_count, 0);
        assert!(report.statistics.is_empty());
        assert!(report.grades.is_empty());
        assert_eq!(report.table_shape, (0, 3));
        assert!(report.totals.is_empty());
    }

    #[test]
    fn test_build_report_json_shape() {
        let records = vec![
            StudentRecord::new("Alice", 20, 70, 60, 80),
            StudentRecord::new("Bob", 21, 50, 60, 80),
        ];
        let report = build_report(&records, DEFAULT_PASSING_SCORE);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["record_count"], 2);
        assert_eq!(json["passed_all"], serde_json::json!(["Alice"]));
        assert_eq!(json["pass_counts"]["math"], 1);
        assert_eq!(json["table_shape"], serde_json::json!([2, 3]));
        assert_eq!(json["totals"][1]["total"], 190);
        assert_eq!(json["grades"][1]["grades"]["math"], "F");
    }
}
