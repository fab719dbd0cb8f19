//! Student aggregation and grading.
//!
//! Computes per-student averages, class-wide statistics and grade
//! distributions, and classifies averages into letter grades and
//! pass/fail status.

pub mod aggregate;
pub mod grade;
pub mod types;
pub mod utility;
