mod bootstrap_config;
mod estimator_choice;

pub use bootstrap_config::BootstrapConfig;
pub use estimator_choice::{EstimatorChoice, EstimatorKind, QuantileParameters};
