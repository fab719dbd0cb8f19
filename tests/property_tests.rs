//! Property-based tests for grading and aggregation invariants.

use gradebook::analyzers::aggregate::{class_average, extremes, grade_distribution};
use gradebook::analyzers::grade::{LetterGrade, PassStatus, letter_grade, pass_status};
use gradebook::analyzers::utility::mean;
use gradebook::record::StudentRecord;
use proptest::prelude::*;

fn arb_scores() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..=100.0, 1..20)
}

fn arb_records() -> impl Strategy<Value = Vec<StudentRecord>> {
    proptest::collection::vec(arb_scores(), 0..15).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .filter_map(|(i, scores)| StudentRecord::new(format!("s{i}"), scores))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_mean_within_bounds(scores in arb_scores()) {
        let m = mean(&scores);
        let lo = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
    }

    #[test]
    fn prop_grade_matches_thresholds(avg in -10.0f64..110.0) {
        let expected = if avg >= 90.0 {
            LetterGrade::A
        } else if avg >= 80.0 {
            LetterGrade::B
        } else if avg >= 70.0 {
            LetterGrade::C
        } else if avg >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        };
        prop_assert_eq!(letter_grade(avg), expected);
    }

    #[test]
    fn prop_pass_agrees_with_grade(avg in -10.0f64..110.0) {
        let passed = pass_status(avg) == PassStatus::Pass;
        prop_assert_eq!(passed, letter_grade(avg) != LetterGrade::F);
    }

    #[test]
    fn prop_distribution_is_complete(records in arb_records()) {
        let dist = grade_distribution(&records);
        prop_assert_eq!(dist.iter().count(), 5);
        prop_assert_eq!(dist.total(), records.len());
    }

    #[test]
    fn prop_class_average_between_extremes(records in arb_records()) {
        match extremes(&records) {
            Some((max, min)) => {
                let avg = class_average(&records);
                prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
            }
            None => prop_assert_eq!(class_average(&records), 0.0),
        }
    }
}
