//! Output formatting for reports and statistics.
//!
//! Supports plain-text rendering, JSON serialization, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::analyzers::aggregate::{build_report, build_statistics};
use crate::analyzers::types::{ClassReport, ClassStatistics};
use crate::record::ClassSnapshot;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

const RULE_WIDTH: usize = 60;

pub const NO_REPORT_DATA: &str = "No student data available";
pub const NO_STATISTICS_DATA: &str = "No data available";

/// Renders the detailed per-student report with its class summary.
pub fn render_report(report: Option<&ClassReport>) -> String {
    let Some(report) = report else {
        return format!("{NO_REPORT_DATA}\n");
    };

    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{heavy}\nSTUDENT GRADE REPORT\n{heavy}\n"));
    out.push_str(&format!(
        "{:<25} {:>8}  {:<5}  {}\n",
        "Name", "Average", "Grade", "Status"
    ));
    out.push_str(&format!("{light}\n"));

    for student in &report.students {
        out.push_str(&format!(
            "{:<25} {:>8.2}  {:<5}  {}\n",
            student.name, student.average, student.grade, student.status
        ));
    }

    out.push_str(&format!("{light}\n"));
    out.push_str(&format!(
        "{:<25} {:>8.2}\n",
        "Class Average:", report.class_average
    ));
    out.push_str(&format!(
        "Students Passing: {}/{} ({:.1}%)\n",
        report.pass_count, report.total_students, report.pass_percentage
    ));
    out
}

/// Renders the class statistics view, including the full grade distribution.
pub fn render_statistics(stats: Option<&ClassStatistics>) -> String {
    let Some(stats) = stats else {
        return format!("{NO_STATISTICS_DATA}\n");
    };

    let mut out = String::from("\nClass Statistics:\n");
    out.push_str(&format!("Total students: {}\n", stats.total_students));
    out.push_str(&format!("Total scores recorded: {}\n", stats.total_scores));
    out.push_str(&format!("Class average: {:.2}\n", stats.class_average));
    out.push_str(&format!(
        "Average of student averages: {:.2}\n",
        stats.average_of_averages
    ));
    out.push_str(&format!("Standard deviation: {:.2}\n", stats.score_stddev));
    out.push_str(&format!("Highest score: {:.2}\n", stats.highest));
    out.push_str(&format!("Lowest score: {:.2}\n", stats.lowest));

    out.push_str("\nGrade Distribution:\n");
    for (grade, count) in stats.distribution.iter() {
        out.push_str(&format!("{grade}: {count} students\n"));
    }
    out
}

/// Detailed report for a snapshot, as text.
pub fn report(snapshot: &ClassSnapshot) -> String {
    render_report(build_report(snapshot).as_ref())
}

/// Statistics view for a snapshot, as text.
pub fn statistics(snapshot: &ClassSnapshot) -> String {
    render_statistics(build_statistics(snapshot).as_ref())
}

/// Serializes any report value as pretty-printed JSON.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Appends one CSV row per student in `report` to the file at `path`.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &Path, report: &ClassReport) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, rows = report.students.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    for student in &report.students {
        writer.serialize(student)?;
    }
    writer.flush()?;

    Ok(())
}
