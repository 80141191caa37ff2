use crate::error::Result;
use crate::student::{StudentRecord, Subject};

/// Returns the names of students scoring strictly below `threshold` in `subject`.
///
/// `subject` is matched case-insensitively. Duplicate names are kept, in input order.
///
/// # Errors
///
/// Returns [`crate::error::StudentError::InvalidSubject`] for anything other
/// than math, english or science.
pub fn filter_students_by_score(
    records: &[StudentRecord],
    subject: &str,
    threshold: i64,
) -> Result<Vec<String>> {
    let subject: Subject = subject.parse()?;
    Ok(names_below(records, subject, threshold))
}

/// Typed variant of [`filter_students_by_score`].
pub fn names_below(records: &[StudentRecord], subject: Subject, threshold: i64) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.score(subject) < threshold)
        .map(|r| r.name.clone())
        .collect()
}
