//! Tests for gap interpolation

use crate::extraction::errors::ChartError;
use crate::extraction::interpolator::fill_gaps;

#[test]
fn test_dense_input_is_unchanged() {
    let estimates = vec![Some(1.0), Some(2.0), Some(3.0)];
    assert_eq!(fill_gaps(&estimates).unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_interior_gap_is_linear() {
    let estimates = vec![Some(10.0), None, None, None, Some(50.0)];
    assert_eq!(
        fill_gaps(&estimates).unwrap(),
        vec![10.0, 20.0, 30.0, 40.0, 50.0]
    );
}

#[test]
fn test_boundary_runs_extend_flat() {
    let estimates = vec![None, None, Some(7.0), Some(9.0), None];
    assert_eq!(
        fill_gaps(&estimates).unwrap(),
        vec![7.0, 7.0, 7.0, 9.0, 9.0]
    );
}

#[test]
fn test_single_known_column_fills_everything() {
    let mut estimates = vec![None; 20];
    estimates[13] = Some(42.0);
    assert_eq!(fill_gaps(&estimates).unwrap(), vec![42.0; 20]);
}

#[test]
fn test_no_gaps_remain_after_filling() {
    let estimates = vec![
        None,
        Some(4.0),
        None,
        None,
        Some(1.0),
        None,
        Some(8.0),
        None,
        None,
    ];
    let dense = fill_gaps(&estimates).unwrap();
    assert_eq!(dense.len(), estimates.len());
    assert!(dense.iter().all(|v| v.is_finite()));
    // Known columns keep their values
    assert_eq!(dense[1], 4.0);
    assert_eq!(dense[4], 1.0);
    assert_eq!(dense[6], 8.0);
    // Interior gaps sit between their neighbors
    assert_eq!(dense[2], 3.0);
    assert_eq!(dense[3], 2.0);
    assert_eq!(dense[5], 4.5);
}

#[test]
fn test_empty_input_passes_through_empty() {
    assert_eq!(fill_gaps(&[]).unwrap(), Vec::<f64>::new());
}

#[test]
fn test_all_missing_is_no_curve() {
    let estimates = vec![None; 300];
    match fill_gaps(&estimates) {
        Err(ChartError::NoCurveDetected) => {}
        other => panic!("Expected NoCurveDetected, got {:?}", other),
    }
}
