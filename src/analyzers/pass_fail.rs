use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::student::{StudentRecord, Subject};

/// Inclusive score a student needs to pass a subject.
pub const DEFAULT_PASSING_SCORE: i64 = 60;

/// Result of classifying records against a passing score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    /// Names passing every subject. Students sharing a name collapse into one entry.
    pub passed_all: BTreeSet<String>,
    /// Per-subject count of records at or above the passing score.
    pub pass_counts: BTreeMap<Subject, usize>,
}

/// Classifies records against `passing_score` (inclusive).
pub fn students_passing_all(records: &[StudentRecord], passing_score: i64) -> PassSummary {
    let mut passed_all = BTreeSet::new();
    let mut pass_counts: BTreeMap<Subject, usize> = Subject::ALL.into_iter().map(|s| (s, 0)).collect();

    for r in records {
        let mut all = true;
        for subject in Subject::ALL {
            if r.score(subject) >= passing_score {
                *pass_counts.entry(subject).or_default() += 1;
            } else {
                all = false;
            }
        }

        if all {
            passed_all.insert(r.name.clone());
        }
    }

    PassSummary {
        passed_all,
        pass_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_all_mixed() {
        let records = vec![
            StudentRecord::new("Alice", 1, 70, 60, 80),
            StudentRecord::new("Bob", 1, 50, 60, 80),
        ];
        let summary = students_passing_all(&records, DEFAULT_PASSING_SCORE);

        assert_eq!(summary.passed_all, BTreeSet::from(["Alice".to_string()]));
        assert_eq!(summary.pass_counts[&Subject::Math], 1);
        assert_eq!(summary.pass_counts[&Subject::English], 2);
        assert_eq!(summary.pass_counts[&Subject::Science], 2);
    }

    #[test]
    fn test_passing_all_empty_has_zero_counts() {
        let summary = students_passing_all(&[], DEFAULT_PASSING_SCORE);
        assert!(summary.passed_all.is_empty());
        assert_eq!(summary.pass_counts.len(), 3);
        assert!(summary.pass_counts.values().all(|&c| c == 0));
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let records = vec![
            StudentRecord::new("Sam", 1, 90, 90, 90),
            StudentRecord::new("Sam", 2, 61, 62, 63),
        ];
        let summary = students_passing_all(&records, DEFAULT_PASSING_SCORE);

        assert_eq!(summary.passed_all.len(), 1);
        assert_eq!(summary.pass_counts[&Subject::Math], 2);
    }

    #[test]
    fn test_custom_threshold() {
        let records = vec![StudentRecord::new("Alice", 1, 70, 60, 80)];
        let summary = students_passing_all(&records, 75);

        assert!(summary.passed_all.is_empty());
        assert_eq!(summary.pass_counts[&Subject::Math], 0);
        assert_eq!(summary.pass_counts[&Subject::Science], 1);
    }
}
