use crate::core::{BootstrapError, Result};
use crate::estimation::estimators::{Estimator, FnEstimator};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when an estimator is registered under a name already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail with [`BootstrapError::DuplicateEstimator`].
    #[default]
    Reject,
    /// The later estimator replaces the earlier one, keeping its position.
    LastWins,
}

/// Ordered collection of uniquely named estimators.
#[derive(Default)]
pub struct EstimatorSet {
    estimators: Vec<Box<dyn Estimator>>,
    policy: DuplicatePolicy,
}

impl EstimatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            estimators: Vec::new(),
            policy,
        }
    }

    /// Builds a set from `(name, function)` pairs, in order.
    pub fn from_fns<N, F, I>(pairs: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (N, F)>,
        N: Into<String>,
        F: Fn(&[f64]) -> f64 + 'static,
    {
        let mut set = Self::with_policy(policy);
        for (name, f) in pairs {
            set.push(FnEstimator::new(name, f))?;
        }
        Ok(set)
    }

    pub fn push<E: Estimator + 'static>(&mut self, estimator: E) -> Result<()> {
        self.push_boxed(Box::new(estimator))
    }

    pub fn push_boxed(&mut self, estimator: Box<dyn Estimator>) -> Result<()> {
        let existing = self
            .estimators
            .iter()
            .position(|e| e.name() == estimator.name());
        match (existing, self.policy) {
            (None, _) => self.estimators.push(estimator),
            (Some(_), DuplicatePolicy::Reject) => {
                return Err(BootstrapError::DuplicateEstimator(
                    estimator.name().to_string(),
                ));
            }
            (Some(idx), DuplicatePolicy::LastWins) => {
                tracing::warn!(name = estimator.name(), "replacing estimator with duplicate name");
                self.estimators[idx] = estimator;
            }
        }
        Ok(())
    }

    /// Chaining form of [`push`](Self::push).
    pub fn with<E: Estimator + 'static>(mut self, estimator: E) -> Result<Self> {
        self.push(estimator)?;
        Ok(self)
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.estimators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.estimators.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.estimators.iter().map(|e| e.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Estimator> {
        self.estimators.iter().map(|e| &**e)
    }
}

impl fmt::Debug for EstimatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimatorSet")
            .field("names", &self.names().collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish()
    }
}
