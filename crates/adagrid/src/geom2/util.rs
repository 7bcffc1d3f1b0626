use super::types::{Axis, WeightedPoint};

/// Median of `values` (mean of the two middle values for even length).
///
/// Reorders `values` in place via selection; returns `None` for an empty slice.
/// Values are compared with `f64::total_cmp`, so callers must reject NaN first.
pub fn median_in_place(values: &mut [f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    let (lower, upper_mid, _) = values.select_nth_unstable_by(mid, f64::total_cmp);
    let upper_mid = *upper_mid;
    if n % 2 == 1 {
        return Some(upper_mid);
    }
    // For even n, the other middle value is the largest of the lower part.
    let lower_mid = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(midpoint(lower_mid, upper_mid))
}

/// Midpoint of `lo <= hi` that stays finite across the whole `f64` range.
#[inline]
fn midpoint(lo: f64, hi: f64) -> f64 {
    (lo + (hi * 0.5 - lo * 0.5)).max(lo).min(hi)
}

/// Median coordinate along `axis` of the points selected by `idx`.
pub fn median_along(
    points: &[WeightedPoint],
    idx: &[usize],
    axis: Axis,
    scratch: &mut Vec<f64>,
) -> Option<f64> {
    scratch.clear();
    scratch.extend(idx.iter().map(|&i| axis.coord(points[i].pos)));
    median_in_place(scratch)
}

/// Split `idx` into `(low, high)` where low holds `coord <= at`. Order within each side is kept.
pub fn split_indices(
    points: &[WeightedPoint],
    idx: &[usize],
    axis: Axis,
    at: f64,
) -> (Vec<usize>, Vec<usize>) {
    idx.iter().partition(|&&i| axis.coord(points[i].pos) <= at)
}

#[inline]
pub fn weight_sum(points: &[WeightedPoint], idx: &[usize]) -> f64 {
    idx.iter().map(|&i| points[i].weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_and_even() {
        let mut odd = vec![5.0, 1.0, 3.0];
        assert_eq!(median_in_place(&mut odd), Some(3.0));
        let mut even = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median_in_place(&mut even), Some(2.5));
        let mut one = vec![7.0];
        assert_eq!(median_in_place(&mut one), Some(7.0));
        assert_eq!(median_in_place(&mut []), None);
    }

    #[test]
    fn median_with_ties_and_negatives() {
        let mut v = vec![2.0, 2.0, -1.0, 2.0];
        assert_eq!(median_in_place(&mut v), Some(2.0));
        let mut w = vec![-3.0, -1.0];
        assert_eq!(median_in_place(&mut w), Some(-2.0));
    }

    #[test]
    fn median_of_extreme_values_stays_finite() {
        let mut v = vec![-f64::MAX, f64::MAX];
        assert_eq!(median_in_place(&mut v), Some(0.0));
        let mut w = vec![f64::MAX, f64::MAX, 1.0, f64::MAX];
        assert_eq!(median_in_place(&mut w), Some(f64::MAX));
        let mut tiny = vec![5e-324, 5e-324];
        assert_eq!(median_in_place(&mut tiny), Some(5e-324));
        let mut far = vec![-1e308, 1e308, -1e308 + 1e300, 1e308 - 1e300];
        let m = median_in_place(&mut far).unwrap();
        assert!(m.is_finite() && (-1e308 + 1e300..=1e308 - 1e300).contains(&m));
    }

    #[test]
    fn split_keeps_median_points_low() {
        let pts: Vec<WeightedPoint> = [0.0, 1.0, 1.0, 2.0]
            .iter()
            .map(|&x| WeightedPoint::new(x, 0.0, 1.0))
            .collect();
        let idx: Vec<usize> = (0..pts.len()).collect();
        let (lo, hi) = split_indices(&pts, &idx, Axis::X, 1.0);
        assert_eq!(lo, vec![0, 1, 2]);
        assert_eq!(hi, vec![3]);
    }
}
