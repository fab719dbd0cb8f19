use crate::analyzers::grade::{PASS_THRESHOLD, letter_grade, pass_status};
use crate::analyzers::types::{ClassReport, ClassStatistics, GradeDistribution, StudentSummary};
use crate::analyzers::utility::{mean, pct, stddev};
use crate::record::{ClassSnapshot, StudentRecord};

fn score_pool(records: &[StudentRecord]) -> Vec<f64> {
    records
        .iter()
        .flat_map(|r| r.scores().iter().copied())
        .collect()
}

/// Mean over every score of every student. Returns 0.0 when there are none.
///
/// This weights students by how many scores they have; it is not the mean of
/// per-student averages.
pub fn class_average(records: &[StudentRecord]) -> f64 {
    mean(&score_pool(records))
}

/// Number of students whose own average reaches the pass threshold.
pub fn pass_count(records: &[StudentRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.average() >= PASS_THRESHOLD)
        .count()
}

pub fn grade_distribution(records: &[StudentRecord]) -> GradeDistribution {
    let mut dist = GradeDistribution::new();
    for record in records {
        dist.record(letter_grade(record.average()));
    }
    dist
}

/// Highest and lowest score across all students, as `(max, min)`.
/// Returns `None` when there are no scores.
pub fn extremes(records: &[StudentRecord]) -> Option<(f64, f64)> {
    let mut pool = records.iter().flat_map(|r| r.scores().iter().copied());
    let first = pool.next()?;
    Some(pool.fold((first, first), |(max, min), v| (max.max(v), min.min(v))))
}

pub fn summarize_student(record: &StudentRecord) -> StudentSummary {
    let average = record.average();
    StudentSummary {
        name: record.name().to_string(),
        average,
        grade: letter_grade(average),
        status: pass_status(average),
        score_count: record.scores().len(),
    }
}

/// Builds the detailed report. Returns `None` for an empty snapshot.
pub fn build_report(snapshot: &ClassSnapshot) -> Option<ClassReport> {
    let records = &snapshot.records;
    if records.is_empty() {
        return None;
    }

    let passing = pass_count(records);

    Some(ClassReport {
        students: records.iter().map(summarize_student).collect(),
        class_average: class_average(records),
        pass_count: passing,
        total_students: records.len(),
        pass_percentage: pct(passing, records.len()),
    })
}

/// Builds the statistics view. Returns `None` for an empty snapshot.
pub fn build_statistics(snapshot: &ClassSnapshot) -> Option<ClassStatistics> {
    let records = &snapshot.records;
    let (highest, lowest) = extremes(records)?;

    let pool = score_pool(records);
    let class_avg = mean(&pool);
    let averages: Vec<f64> = records.iter().map(StudentRecord::average).collect();

    Some(ClassStatistics {
        total_students: records.len(),
        total_scores: pool.len(),
        class_average: class_avg,
        average_of_averages: mean(&averages),
        score_stddev: stddev(&pool, class_avg),
        highest,
        lowest,
        distribution: grade_distribution(records),
    })
}
