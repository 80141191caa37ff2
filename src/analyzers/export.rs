use serde::Serialize;

use crate::student::{StudentRecord, Subject};

/// Row-major score matrix with one row per student and a column per subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    rows: Vec<[i64; 3]>,
}

impl ScoreTable {
    pub const COLUMNS: usize = Subject::ALL.len();

    pub fn from_records(records: &[StudentRecord]) -> Self {
        Self {
            rows: records
                .iter()
                .map(|r| [r.math, r.english, r.science])
                .collect(),
        }
    }

    /// `(rows, columns)`; columns is always 3, even when empty.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), Self::COLUMNS)
    }

    pub fn rows(&self) -> &[[i64; 3]] {
        &self.rows
    }

    pub fn column(&self, subject: Subject) -> Vec<i64> {
        let idx = match subject {
            Subject::Math => 0,
            Subject::English => 1,
            Subject::Science => 2,
        };
        self.rows.iter().map(|row| row[idx]).collect()
    }

    /// Per-row sum of the three columns.
    pub fn row_totals(&self) -> Vec<i128> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| i128::from(v)).sum())
            .collect()
    }
}

/// A student's name paired with their summed score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentTotal {
    pub name: String,
    pub total: i128,
}

/// Builds the score table and per-student totals, both in input order.
pub fn convert_scores_to_array(records: &[StudentRecord]) -> (ScoreTable, Vec<StudentTotal>) {
    let table = ScoreTable::from_records(records);
    let totals = records
        .iter()
        .map(|r| StudentTotal {
            name: r.name.clone(),
            total: r.total(),
        })
        .collect();

    (table, totals)
}
