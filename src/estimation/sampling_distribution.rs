use crate::core::{BootstrapError, Result};
use crate::utils::math;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::{Display, Formatter};

/// Values of one estimator across every sample, in sample order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SamplingDistribution {
    pub name: String,
    pub values: Vec<f64>,
}

impl SamplingDistribution {
    #[inline]
    pub fn new<N: Into<String>>(name: N, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        math::mean(&self.values)
    }

    /// Bootstrap standard error: sample standard deviation of the replicates.
    pub fn standard_error(&self) -> f64 {
        math::sample_variance(&self.values).sqrt()
    }

    /// Two-sided percentile interval at the given confidence level.
    pub fn percentile_interval(&self, confidence: f64) -> Result<(f64, f64)> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(BootstrapError::invalid_input(format!(
                "confidence must be in (0, 1), got {confidence}"
            )));
        }
        if self.values.is_empty() {
            return Err(BootstrapError::invalid_input(format!(
                "sampling distribution '{}' is empty",
                self.name
            )));
        }
        let tail = (1.0 - confidence) / 2.0;
        let sorted = math::sorted(&self.values);
        Ok((
            math::quantile_sorted(&sorted, tail),
            math::quantile_sorted(&sorted, 1.0 - tail),
        ))
    }
}

impl Display for SamplingDistribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: n={}, mean={:.6}, se={:.6}",
            self.name,
            self.len(),
            self.mean(),
            self.standard_error()
        )
    }
}

/// Estimator name to sampling distribution, one entry per name.
///
/// Entries keep the order in which their estimators were registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplingDistributions {
    entries: Vec<SamplingDistribution>,
}

impl SamplingDistributions {
    pub(crate) fn from_entries(entries: Vec<SamplingDistribution>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&SamplingDistribution> {
        self.entries.iter().find(|d| d.name == name)
    }

    /// Values of `name`, if present.
    pub fn values(&self, name: &str) -> Option<&[f64]> {
        self.get(name).map(|d| d.values.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplingDistribution> {
        self.entries.iter()
    }

    /// JSON object mapping each name to its values.
    ///
    /// JSON has no NaN or infinity, so non-finite values (undefined
    /// estimates such as the spread of a single value) become `null`.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<'a> IntoIterator for &'a SamplingDistributions {
    type Item = &'a SamplingDistribution;
    type IntoIter = std::slice::Iter<'a, SamplingDistribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for SamplingDistributions {
    type Item = SamplingDistribution;
    type IntoIter = std::vec::IntoIter<SamplingDistribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for SamplingDistributions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for d in &self.entries {
            map.serialize_entry(&d.name, &d.values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dist(values: Vec<f64>) -> SamplingDistribution {
        SamplingDistribution::new("mean", values)
    }

    #[test]
    fn summary_of_replicates() {
        let d = dist(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(d.len(), 5);
        assert!((d.mean() - 3.0).abs() < 1e-15);
        assert!((d.standard_error() - 2.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(d.to_string(), "mean: n=5, mean=3.000000, se=1.581139");
    }

    #[test]
    fn percentile_interval_brackets_the_middle() {
        let d = dist((0..=100).map(f64::from).collect());
        let (lo, hi) = d.percentile_interval(0.9).unwrap();
        assert!((lo - 5.0).abs() < 1e-9, "lo={lo}");
        assert!((hi - 95.0).abs() < 1e-9, "hi={hi}");
    }

    #[test]
    fn percentile_interval_rejects_bad_input() {
        let d = dist(vec![1.0, 2.0]);
        for c in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(d.percentile_interval(c).is_err(), "confidence={c}");
        }
        assert!(dist(vec![]).percentile_interval(0.95).is_err());
    }

    #[test]
    fn mapping_lookup_and_json() {
        let m = SamplingDistributions::from_entries(vec![
            SamplingDistribution::new("mean", vec![1.0, 2.0]),
            SamplingDistribution::new("max", vec![3.0, 4.0]),
        ]);
        assert_eq!(m.len(), 2);
        assert_eq!(m.values("max"), Some(&[3.0, 4.0][..]));
        assert!(m.get("median").is_none());
        assert!(m.contains("mean"));
        assert_eq!(m.names().collect::<Vec<_>>(), vec!["mean", "max"]);
        assert_eq!(
            m.to_json().unwrap(),
            json!({"mean": [1.0, 2.0], "max": [3.0, 4.0]})
        );
        assert_eq!(m.into_iter().count(), 2);
    }

    #[test]
    fn non_finite_values_serialize_as_null() {
        let m = SamplingDistributions::from_entries(vec![SamplingDistribution::new(
            "std_dev",
            vec![f64::NAN, 1.5, f64::INFINITY],
        )]);
        assert_eq!(m.to_json().unwrap(), json!({"std_dev": [null, 1.5, null]}));
    }
}
