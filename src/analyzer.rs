//! The two calibration answers: the resulting frequency, and the first
//! frequency reached twice.

use crate::error::CalibrationError;
use crate::totals::running_totals;
use crate::IteratorExt;
use itertools::Itertools;
use tracing::debug;

/// The frequency reached after applying every change once, starting from zero.
pub fn frequency(changes: &[i32]) -> i64 {
    changes.iter().map(|&change| i64::from(change)).sum()
}

/// Return true if applying `changes` over and over will ever reach some
/// frequency twice.
///
/// If the first pass ends at `p[1] .. p[n]` and drifts by `s` overall, the
/// k'th pass reaches `p[i] + k*s`. With no drift the second pass retraces the
/// first. Otherwise `p[j]` comes around again exactly when some other `p[i]`
/// lies a whole number of drifts away from it, that is, when the two agree
/// modulo `s`.
pub fn repeat_possible(changes: &[i32]) -> bool {
    if changes.is_empty() {
        return false;
    }

    let drift = frequency(changes);
    if drift == 0 {
        return true;
    }

    let modulus = drift.abs();
    let mut residues: Vec<i64> = running_totals(changes)
        .take(changes.len())
        .map(|total| total.rem_euclid(modulus))
        .collect();
    residues.sort();
    residues.iter().tuple_windows().any(|(a, b)| a == b)
}

/// Return the first frequency reached twice when applying `changes` over and
/// over, starting from zero. The starting frequency itself doesn't count as
/// reached.
///
/// Inputs that can never repeat are rejected up front. Otherwise the scan
/// gives up after `max_cycles` full passes, or if the totals outgrow an `i64`.
pub fn first_repeat(changes: &[i32], max_cycles: usize) -> Result<i64, CalibrationError> {
    if changes.is_empty() {
        return Err(CalibrationError::EmptyInput);
    }
    if !repeat_possible(changes) {
        return Err(CalibrationError::NeverRepeats);
    }

    let mut totals = running_totals(changes);
    let limit = max_cycles.saturating_mul(changes.len());
    match totals.by_ref().take(limit).first_repeated() {
        Some(repeat) => {
            debug!(
                repeat,
                cycles = totals.cycles(),
                steps = totals.steps(),
                "found repeated frequency"
            );
            Ok(repeat)
        }
        None => Err(CalibrationError::NoRepeat {
            cycles: totals.cycles(),
        }),
    }
}

#[cfg(test)]
static TEST_CASES: &[(&[i32], i64, i64)] = &[
    (&[1, -2, 3, 1], 3, 2),
    (&[1, -1], 0, 1),
    (&[3, 3, 4, -2, -4], 4, 10),
    (&[-6, 3, 8, 5, -6], 4, 5),
    (&[7, 7, -2, -7, -4], 1, 14),
    (&[0], 0, 0),
    (&[5, -5, 5], 5, 5),
];

#[test]
fn test_frequency() {
    assert_eq!(frequency(&[]), 0);
    assert_eq!(frequency(&[5]), 5);
    assert_eq!(frequency(&[-17]), -17);
    assert_eq!(frequency(&[1, 1, 1]), 3);
    assert_eq!(frequency(&[1, 1, -2]), 0);
    assert_eq!(frequency(&[-1, -2, -3]), -6);
    assert_eq!(
        frequency(&[i32::max_value(), i32::max_value(), 2]),
        4294967296
    );

    for &(changes, expected, _) in TEST_CASES {
        assert_eq!(frequency(changes), expected);
        let reversed: Vec<i32> = changes.iter().cloned().rev().collect();
        assert_eq!(frequency(&reversed), expected);
    }
}

#[test]
fn test_first_repeat() {
    for &(changes, _, expected) in TEST_CASES {
        assert_eq!(first_repeat(changes, 1000).unwrap(), expected, "{:?}", changes);
    }
}

/// Check `first_repeat` against a scan that simply keeps every total in a
/// vector: the answer must have appeared once before, and no earlier total
/// may have repeated.
#[test]
fn test_first_repeat_is_earliest() {
    let inputs: &[&[i32]] = &[
        &[1, -2, 3, 1],
        &[3, 3, 4, -2, -4],
        &[-6, 3, 8, 5, -6],
        &[7, 7, -2, -7, -4],
        &[2, -5, 4, 4, -3, 1],
        &[-1, -1, 3, -2, 2],
    ];
    for &changes in inputs {
        let repeat = first_repeat(changes, 1000).unwrap();
        let mut history = Vec::new();
        for total in running_totals(changes) {
            if history.contains(&total) {
                assert_eq!(total, repeat, "{:?}", changes);
                assert_eq!(history.iter().filter(|&&t| t == repeat).count(), 1);
                break;
            }
            history.push(total);
        }
    }
}

#[test]
fn test_first_repeat_empty() {
    match first_repeat(&[], 1000) {
        Err(CalibrationError::EmptyInput) => (),
        other => panic!("expected EmptyInput, got {:?}", other),
    }
}

#[test]
fn test_first_repeat_never() {
    for changes in &[&[5][..], &[-3][..], &[1, 1][..], &[2, 3, -1][..]] {
        assert!(!repeat_possible(changes), "{:?}", changes);
        match first_repeat(changes, 1000) {
            Err(CalibrationError::NeverRepeats) => (),
            other => panic!("expected NeverRepeats for {:?}, got {:?}", changes, other),
        }
    }
}

#[test]
fn test_first_repeat_cycle_limit() {
    // Totals run 1000, 1, 1001, 2, 1002, 3, ... and only come back to 1000
    // on the thousandth pass.
    let changes = &[1000, -999];
    assert!(repeat_possible(changes));
    match first_repeat(changes, 10) {
        Err(CalibrationError::NoRepeat { cycles }) => assert_eq!(cycles, 10),
        other => panic!("expected NoRepeat, got {:?}", other),
    }
    assert_eq!(first_repeat(changes, 2000).unwrap(), 1000);
}

#[test]
fn test_repeat_possible() {
    assert!(!repeat_possible(&[]));
    assert!(repeat_possible(&[0]));
    assert!(repeat_possible(&[1, -1]));
    assert!(repeat_possible(&[3, 3, 4, -2, -4]));
    assert!(!repeat_possible(&[3, 3]));
    assert!(repeat_possible(&[4, -2, 2]));
}
