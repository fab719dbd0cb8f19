//! Student records and the snapshot produced by one read of a roster.

use serde::Serialize;

/// One student's name plus the scores that parsed successfully.
///
/// Always holds at least one score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    scores: Vec<f64>,
}

impl StudentRecord {
    /// Builds a record, or `None` when no scores survived parsing.
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            scores,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Mean of this student's scores.
    pub fn average(&self) -> f64 {
        crate::analyzers::utility::mean(&self.scores)
    }
}

/// A score token that could not be used, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedScore {
    pub line: u64,
    pub name: String,
    pub token: String,
}

/// All records loaded from a single read of the source.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClassSnapshot {
    pub records: Vec<StudentRecord>,
    pub warnings: Vec<MalformedScore>,
}

impl ClassSnapshot {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Every score of every student, in roster order.
    pub fn all_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().flat_map(|r| r.scores().iter().copied())
    }
}
