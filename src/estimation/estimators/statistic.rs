use crate::core::{BootstrapError, Result};
use crate::estimation::estimators::Estimator;
use crate::utils::math;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Built-in summary statistics, reported under their snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Statistic {
    Mean,
    Median,
    Variance,
    StdDev,
    Min,
    Max,
}

impl Estimator for Statistic {
    fn name(&self) -> &str {
        let name: &'static str = self.into();
        name
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        match self {
            Statistic::Mean => math::mean(sample),
            Statistic::Median => math::quantile_sorted(&math::sorted(sample), 0.5),
            Statistic::Variance => math::sample_variance(sample),
            Statistic::StdDev => math::sample_variance(sample).sqrt(),
            Statistic::Min => math::min(sample),
            Statistic::Max => math::max(sample),
        }
    }
}

/// R-7 quantile at a fixed probability, named `quantile_<p>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantile {
    p: f64,
    name: String,
}

impl Quantile {
    pub fn new(p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(BootstrapError::invalid_input(format!(
                "quantile probability must be in [0, 1], got {p}"
            )));
        }
        Ok(Self {
            p,
            name: format!("quantile_{p}"),
        })
    }

    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Estimator for Quantile {
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        math::quantile_sorted(&math::sorted(sample), self.p)
    }
}
