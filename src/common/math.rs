//! Moving-average primitives shared by every indicator.

/// Simple moving average.
///
/// Element `j` of the result is the mean of `series[j..j + period]`, so the
/// output is aligned with the input suffix starting at `period - 1` and has
/// `series.len() - period + 1` elements. Returns an empty vector when the
/// series is shorter than `period` or `period` is zero.
pub fn sma(series: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || series.len() < period {
        return Vec::new();
    }

    series
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Exponential moving average with smoothing constant `2 / (period + 1)`.
///
/// Seeded with the first input value rather than an SMA of the first window,
/// so the output has the same length as the input and `ema[0] == series[0]`.
pub fn ema(series: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = series.first() else {
        return Vec::new();
    };

    let k = smoothing_factor(period);
    let mut values = Vec::with_capacity(series.len());
    values.push(first);

    let mut prev = first;
    for &value in &series[1..] {
        prev = ema_from_previous(value, prev, k);
        values.push(prev);
    }

    values
}

/// Smoothing constant used by [`ema`].
pub fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step from the previous value.
pub fn ema_from_previous(value: f64, prev: f64, k: f64) -> f64 {
    value * k + prev * (1.0 - k)
}

/// Element-wise `a - b` over the common prefix of both series.
pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
