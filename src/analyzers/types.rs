//! Structured results produced by the aggregation pipeline.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::analyzers::grade::{LetterGrade, PassStatus};

/// Number of students per letter grade. Always holds all five letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeDistribution(BTreeMap<LetterGrade, usize>);

impl GradeDistribution {
    pub fn new() -> Self {
        Self(LetterGrade::ALL.iter().map(|&g| (g, 0)).collect())
    }

    pub fn record(&mut self, grade: LetterGrade) {
        *self.0.entry(grade).or_default() += 1;
    }

    pub fn count(&self, grade: LetterGrade) -> usize {
        self.0.get(&grade).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Iterates A through F.
    pub fn iter(&self) -> impl Iterator<Item = (LetterGrade, usize)> + '_ {
        self.0.iter().map(|(g, n)| (*g, *n))
    }
}

impl Default for GradeDistribution {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the detailed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub average: f64,
    pub grade: LetterGrade,
    pub status: PassStatus,
    pub score_count: usize,
}

/// Detailed per-student report with a class summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub students: Vec<StudentSummary>,
    pub class_average: f64,
    pub pass_count: usize,
    pub total_students: usize,
    pub pass_percentage: f64,
}

/// Class-wide statistics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    pub total_students: usize,
    pub total_scores: usize,
    pub class_average: f64,
    pub average_of_averages: f64,
    pub score_stddev: f64,
    pub highest: f64,
    pub lowest: f64,
    pub distribution: GradeDistribution,
}
