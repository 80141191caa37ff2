use serde::Serialize;
use std::collections::BTreeMap;

use crate::student::{StudentRecord, Subject};

/// Mean and integer extrema of one subject's scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectStats {
    pub avg: f64,
    pub max: i64,
    pub min: i64,
}

impl SubjectStats {
    /// Accumulates sum and extrema in one pass. Returns `None` when `scores` is empty.
    pub fn from_scores(scores: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut scores = scores.into_iter();
        let first = scores.next()?;

        let mut sum = first as f64;
        let mut count = 1usize;
        let mut max = first;
        let mut min = first;

        for s in scores {
            sum += s as f64;
            count += 1;
            max = max.max(s);
            min = min.min(s);
        }

        Some(SubjectStats {
            avg: sum / count as f64,
            max,
            min,
        })
    }
}

/// Computes per-subject statistics across all records.
///
/// An empty record set yields an empty map rather than zeroed entries.
pub fn calculate_subject_statistics(records: &[StudentRecord]) -> BTreeMap<Subject, SubjectStats> {
    let mut stats = BTreeMap::new();

    for subject in Subject::ALL {
        if let Some(s) = SubjectStats::from_scores(records.iter().map(|r| r.score(subject))) {
            stats.insert(subject, s);
        }
    }

    stats
}
