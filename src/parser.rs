//! Tolerant line parser for student record files.
//!
//! Each line is `name,age,math,english,science`. Lines with the wrong number
//! of fields, a non-integer numeric field, an empty name, or invalid UTF-8 are
//! dropped without a warning. A missing file is logged and yields no records.

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Result, StudentError};
use crate::student::StudentRecord;

const FIELD_COUNT: usize = 5;

/// Converts split fields into a [`StudentRecord`], trimming each field first.
///
/// Scores and age must fit in an `i64`; anything wider fails to parse and the
/// line is dropped like any other malformed line.
pub fn parse_record(record: &mut StringRecord) -> Option<StudentRecord> {
    record.trim();
    if record.len() != FIELD_COUNT {
        return None;
    }

    let name = record.get(0)?;
    if name.is_empty() {
        return None;
    }

    let int = |i: usize| record.get(i)?.parse::<i64>().ok();

    Some(StudentRecord {
        name: name.to_string(),
        age: int(1)?,
        math: int(2)?,
        english: int(3)?,
        science: int(4)?,
    })
}

/// Parses every line of `reader`, keeping input order.
///
/// # Errors
///
/// Returns an error only if the underlying reader fails; malformed lines never error.
pub fn parse_students<R: Read>(reader: R) -> Result<Vec<StudentRecord>> {
    // Plain comma split: quotes carry no meaning in this format. Trimming is
    // left to StringRecord so non-ASCII whitespace is stripped too.
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(reader);

    let mut students = Vec::new();
    let mut skipped = 0usize;
    let mut raw = ByteRecord::new();

    while rdr.read_byte_record(&mut raw)? {
        let parsed = StringRecord::from_byte_record(std::mem::take(&mut raw))
            .ok()
            .and_then(|mut record| parse_record(&mut record));

        match parsed {
            Some(student) => students.push(student),
            None => skipped += 1,
        }
    }

    debug!(loaded = students.len(), skipped, "Parsed student records");
    Ok(students)
}

/// Loads student records from `path`.
///
/// A missing file is reported with a warning and produces an empty vector.
///
/// # Errors
///
/// Returns [`StudentError::Io`] for open failures other than not-found, and
/// [`StudentError::Csv`] if reading fails part way through the file.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_student_data(path: impl AsRef<Path>) -> Result<Vec<StudentRecord>> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "File not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(StudentError::io(path, e)),
    };

    parse_students(file)
}
