// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::Range;

/// Fraction of the data span left empty on each side of an axis.
pub const MARGIN: f64 = 0.05;

/// Axis range covering every finite value with `MARGIN` padding on each end.
///
/// A single distinct value is widened around itself so the axis always has a
/// non-zero extent. With no finite values at all the unit range is used.
///
/// Both ends and the width of the returned range are always finite. Data
/// near the limits of `f64` gets a range no wider than `f64::MAX`, which may
/// leave the extreme values just outside the axis.
pub fn padded_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values.into_iter().filter(|v| v.is_finite()) {
        min = min.min(value);
        max = max.max(value);
    }

    if min > max {
        return 0.0..1.0;
    }

    // halved before subtracting so the width cannot overflow
    let mid = min / 2.0 + max / 2.0;
    let half = max / 2.0 - min / 2.0;

    let half = if half == 0.0 {
        if min == 0.0 {
            0.5
        } else {
            min.abs() * MARGIN
        }
    } else {
        half + half * 2.0 * MARGIN
    };
    let half = half.min(f64::MAX / 2.0);

    let start = (mid - half).max(f64::MIN);
    let end = (mid + half).min(f64::MAX);

    start..end
}

/// Pairs up `x` and `y` positionally, dropping any point with a non-finite
/// coordinate. Extra values in the longer slice are ignored.
pub fn finite_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .copied()
        .zip(y.iter().copied())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}
