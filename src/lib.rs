pub mod analyzers;
pub mod error;
pub mod output;
pub mod parser;
pub mod stats;
pub mod student;

pub use error::{Result, StudentError};
pub use student::{StudentRecord, Subject};
