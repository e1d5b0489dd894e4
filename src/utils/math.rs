//! Scalar reductions shared by the built-in statistics.
//!
//! Every function here follows the online estimator convention: an
//! undefined result (empty input, too few values) is `NaN`, never a panic.

/// Kahan-Babuska compensated sum.
pub fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    kahan_sum(values) / values.len() as f64
}

/// Sample variance (denominator `n - 1`) via Welford's update.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mut count = 0.0_f64;
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &x in values {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }
    m2 / (count - 1.0)
}

#[inline]
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
}

#[inline]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_unstable_by(f64::total_cmp);
    out
}

/// R-7 quantile of already sorted data. `p` must lie in `[0, 1]`.
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        sorted_values[n - 1]
    } else {
        (1.0 - g) * sorted_values[j] + g * sorted_values[j + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kahan_recovers_small_terms() {
        let mut v = vec![1e16];
        v.extend(std::iter::repeat_n(1.0, 10));
        assert_eq!(kahan_sum(&v), 1e16 + 10.0);
    }

    #[test]
    fn mean_and_variance_of_known_data() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&v) - 5.0).abs() < 1e-15);
        assert!((sample_variance(&v) - 4.571428571428571).abs() < 1e-12);
    }

    #[test]
    fn undefined_results_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(sample_variance(&[1.0]).is_nan());
        assert!(min(&[]).is_nan());
        assert!(max(&[]).is_nan());
        assert!(quantile_sorted(&[], 0.5).is_nan());
        assert!(quantile_sorted(&[1.0, 2.0], 1.5).is_nan());
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let s = sorted(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(s, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(quantile_sorted(&s, 0.0), 1.0);
        assert_eq!(quantile_sorted(&s, 1.0), 4.0);
        assert!((quantile_sorted(&s, 0.5) - 2.5).abs() < 1e-15);
        assert!((quantile_sorted(&s, 0.25) - 1.75).abs() < 1e-15);
    }

    #[test]
    fn min_max_pick_extremes() {
        let v = [3.0, -1.0, 8.5, 0.0];
        assert_eq!(min(&v), -1.0);
        assert_eq!(max(&v), 8.5);
    }
}
