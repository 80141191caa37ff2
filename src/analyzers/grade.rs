use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::student::{StudentRecord, Subject};

/// Letter grade for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

/// Converts a score into a letter grade. Lower bounds are inclusive.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | >= 80   | B     |
/// | >= 70   | C     |
/// | >= 60   | D     |
/// | < 60    | F     |
pub fn assign_grade(score: i64) -> Grade {
    match score {
        s if s >= 90 => Grade::A,
        s if s >= 80 => Grade::B,
        s if s >= 70 => Grade::C,
        s if s >= 60 => Grade::D,
        _ => Grade::F,
    }
}

/// One student's grade in every subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentGrades {
    pub name: String,
    pub grades: BTreeMap<Subject, Grade>,
}

/// Grades every record, in input order.
pub fn grade_all_students(records: &[StudentRecord]) -> Vec<StudentGrades> {
    records
        .iter()
        .map(|r| StudentGrades {
            name: r.name.clone(),
            grades: Subject::ALL
                .into_iter()
                .map(|s| (s, assign_grade(r.score(s))))
                .collect(),
        })
        .collect()
}
