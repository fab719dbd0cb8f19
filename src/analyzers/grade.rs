use serde::Serialize;
use std::fmt;

/// Averages at or above this value pass, and earn at least a D.
pub const PASS_THRESHOLD: f64 = 60.0;

/// Letter grade for a student's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// All grades in report order.
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassStatus {
    Pass,
    Fail,
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            PassStatus::Pass => "Pass",
            PassStatus::Fail => "Fail",
        })
    }
}

/// Converts a numeric average into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | >= 80   | B     |
/// | >= 70   | C     |
/// | >= 60   | D     |
/// | < 60    | F     |
pub fn letter_grade(average: f64) -> LetterGrade {
    match average {
        a if a >= 90.0 => LetterGrade::A,
        a if a >= 80.0 => LetterGrade::B,
        a if a >= 70.0 => LetterGrade::C,
        a if a >= PASS_THRESHOLD => LetterGrade::D,
        _ => LetterGrade::F,
    }
}

pub fn pass_status(average: f64) -> PassStatus {
    if average >= PASS_THRESHOLD {
        PassStatus::Pass
    } else {
        PassStatus::Fail
    }
}
