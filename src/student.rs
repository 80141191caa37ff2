//! Core student record types.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::StudentError;

/// One validated row of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: i64,
    pub math: i64,
    pub english: i64,
    pub science: i64,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, age: i64, math: i64, english: i64, science: i64) -> Self {
        Self {
            name: name.into(),
            age,
            math,
            english,
            science,
        }
    }

    /// Returns the score recorded for `subject`.
    pub fn score(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Math => self.math,
            Subject::English => self.english,
            Subject::Science => self.science,
        }
    }

    /// Sum of the three subject scores, widened so any three `i64` scores fit.
    pub fn total(&self) -> i128 {
        i128::from(self.math) + i128::from(self.english) + i128::from(self.science)
    }
}

/// A tracked academic subject. Ordering follows the column order of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    English,
    Science,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::English, Subject::Science];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::English => "english",
            Subject::Science => "science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = StudentError;

    /// Case-insensitive; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "math" => Ok(Subject::Math),
            "english" => Ok(Subject::English),
            "science" => Ok(Subject::Science),
            _ => Err(StudentError::invalid_subject(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_parse_is_case_insensitive() {
        assert_eq!("MATH".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("English".parse::<Subject>().unwrap(), Subject::English);
        assert_eq!("science".parse::<Subject>().unwrap(), Subject::Science);
    }

    #[test]
    fn test_subject_parse_rejects_unknown() {
        let err = "history".parse::<Subject>().unwrap_err();
        assert!(matches!(err, StudentError::InvalidSubject { ref subject } if subject == "history"));
    }

    #[test]
    fn test_score_and_total() {
        let rec = StudentRecord::new("Alice", 20, 70, 60, -5);
        assert_eq!(rec.score(Subject::Math), 70);
        assert_eq!(rec.score(Subject::English), 60);
        assert_eq!(rec.score(Subject::Science), -5);
        assert_eq!(rec.total(), 125);
    }

    #[test]
    fn test_total_does_not_overflow_at_i64_limits() {
        let high = StudentRecord::new("A", 1, i64::MAX, 1, 0);
        assert_eq!(high.total(), i64::MAX as i128 + 1);

        let low = StudentRecord::new("B", 1, i64::MIN, i64::MIN, i64::MIN);
        assert_eq!(low.total(), 3 * i64::MIN as i128);
    }

    #[test]
    fn test_subject_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Subject::Science).unwrap(), "\"science\"");
    }
}
