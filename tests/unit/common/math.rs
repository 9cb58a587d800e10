//! Unit tests for moving-average primitives

use chartsignal::common::math::{ema, sma, subtract};

#[test]
fn test_sma_length_matches_warm_up() {
    let series: Vec<f64> = (1..=60).map(|v| v as f64).collect();
    for period in [1, 2, 5, 20, 50, 60] {
        assert_eq!(sma(&series, period).len(), series.len() - period + 1);
    }
}

#[test]
fn test_sma_values() {
    let series = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(sma(&series, 3), vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_sma_short_series_is_empty() {
    assert!(sma(&[1.0, 2.0], 3).is_empty());
    assert!(sma(&[1.0, 2.0], 0).is_empty());
}

#[test]
fn test_ema_keeps_length_and_seed() {
    let series = [10.0, 11.0, 9.5, 12.0, 13.0, 12.5];
    for period in [1, 3, 12, 26] {
        let values = ema(&series, period);
        assert_eq!(values.len(), series.len());
        assert_eq!(values[0], series[0]);
    }
}

#[test]
fn test_ema_recurrence() {
    let series = [10.0, 20.0, 30.0];
    let values = ema(&series, 3);
    // k = 0.5
    assert_eq!(values, vec![10.0, 15.0, 22.5]);
}

#[test]
fn test_ema_empty_series() {
    assert!(ema(&[], 12).is_empty());
}

#[test]
fn test_subtract_elementwise() {
    assert_eq!(subtract(&[5.0, 3.0], &[1.0, 4.0]), vec![4.0, -1.0]);
}
