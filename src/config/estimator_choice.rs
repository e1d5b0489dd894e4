use crate::core::Result;
use crate::estimation::{Estimator, Quantile, Statistic};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_quantile_p() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuantileParameters {
    #[serde(default = "default_quantile_p")]
    #[schemars(
        title = "Probability",
        description = "Quantile probability (0.0–1.0)",
        range(min = 0.0, max = 1.0),
        default = "default_quantile_p"
    )]
    pub p: f64,
}

impl Default for QuantileParameters {
    fn default() -> Self {
        Self {
            p: default_quantile_p(),
        }
    }
}

/// Declarative form of a built-in estimator.
///
/// Serialized as `{"type": "<kind>"}` or, for parameterized kinds,
/// `{"type": "<kind>", "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
#[strum_discriminants(name(EstimatorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
pub enum EstimatorChoice {
    #[strum_discriminants(strum(message = "Mean", detailed_message = "Arithmetic mean."))]
    Mean,

    #[strum_discriminants(strum(message = "Median", detailed_message = "Middle value."))]
    Median,

    #[strum_discriminants(strum(
        message = "Variance",
        detailed_message = "Sample variance with Bessel's correction."
    ))]
    Variance,

    #[strum_discriminants(strum(
        message = "Standard Deviation",
        detailed_message = "Square root of the sample variance."
    ))]
    StdDev,

    #[strum_discriminants(strum(message = "Minimum", detailed_message = "Smallest value."))]
    Min,

    #[strum_discriminants(strum(message = "Maximum", detailed_message = "Largest value."))]
    Max,

    #[strum_discriminants(strum(
        message = "Quantile",
        detailed_message = "Linearly interpolated quantile at probability p."
    ))]
    Quantile(QuantileParameters),
}

impl EstimatorChoice {
    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(EstimatorChoice)
    }

    /// Default `params` JSON for a kind; `null` for kinds without params.
    pub fn default_params(kind: EstimatorKind) -> Value {
        match kind {
            EstimatorKind::Quantile => json!(QuantileParameters::default()),
            _ => Value::Null,
        }
    }

    /// Builds the typed choice from a kind and its params.
    pub fn from_parts(kind: EstimatorKind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = if params.is_null() {
            json!({ "type": key })
        } else {
            json!({ "type": key, "params": params })
        };
        Ok(serde_json::from_value(v)?)
    }

    pub fn kind(&self) -> EstimatorKind {
        self.into()
    }

    pub fn build(&self) -> Result<Box<dyn Estimator>> {
        let estimator: Box<dyn Estimator> = match self {
            EstimatorChoice::Mean => Box::new(Statistic::Mean),
            EstimatorChoice::Median => Box::new(Statistic::Median),
            EstimatorChoice::Variance => Box::new(Statistic::Variance),
            EstimatorChoice::StdDev => Box::new(Statistic::StdDev),
            EstimatorChoice::Min => Box::new(Statistic::Min),
            EstimatorChoice::Max => Box::new(Statistic::Max),
            EstimatorChoice::Quantile(params) => Box::new(Quantile::new(params.p)?),
        };
        Ok(estimator)
    }
}
