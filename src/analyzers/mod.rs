//! Derived views over a loaded record set.
//!
//! Every analysis here is a pure function of the records: grading, pass/fail
//! classification, threshold filtering, and the score table export. The
//! `report` module combines them into one serializable document.

pub mod export;
pub mod filter;
pub mod grade;
pub mod pass_fail;
pub mod report;
