use crate::core::{BootstrapError, Result};
use crate::utils::math;
use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;

const NOT_ITERABLE: &str = "dataset must support iteration";
const EMPTY: &str = "dataset must have positive cardinality";
const NOT_NUMERIC: &str = "dataset values must be numeric";

/// Immutable, non-empty, contiguous `f64` data to be resampled.
///
/// Cloning is cheap: the values live behind an `Arc<[f64]>` and are never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Arc<[f64]>,
}

impl Dataset {
    /// Materializes `values` into a flat array.
    ///
    /// Fails with [`BootstrapError::InvalidInput`] when the input yields no
    /// elements.
    pub fn try_from_iter<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let values: Vec<f64> = values.into_iter().map(Into::into).collect();
        Self::from_vec(values)
    }

    /// Flattens two-dimensional input row by row.
    pub fn from_rows<R, I, T>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let values: Vec<f64> = rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(Into::into))
            .collect();
        Self::from_vec(values)
    }

    /// Builds a dataset from a dynamically typed JSON value.
    ///
    /// Arrays are flattened recursively. Anything that is not an array
    /// cannot be iterated and is rejected, as are non-numeric leaves.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(BootstrapError::invalid_input(NOT_ITERABLE));
        };
        let mut out = Vec::with_capacity(items.len());
        flatten_json(items, &mut out)?;
        Self::from_vec(out)
    }

    fn from_vec(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(BootstrapError::invalid_input(EMPTY));
        }
        Ok(Self {
            values: values.into(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn contains(&self, value: f64) -> bool {
        self.values.iter().any(|v| v.total_cmp(&value).is_eq())
    }

    /// Ascending copy of the values, NaNs ordered last.
    pub fn sorted(&self) -> Vec<f64> {
        math::sorted(&self.values)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

impl Deref for Dataset {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Dataset {
    type Error = BootstrapError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_vec(values)
    }
}

impl TryFrom<&[f64]> for Dataset {
    type Error = BootstrapError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.to_vec())
    }
}

fn flatten_json(items: &[Value], out: &mut Vec<f64>) -> Result<()> {
    for item in items {
        match item {
            Value::Array(inner) => flatten_json(inner, out)?,
            Value::Number(n) => match n.as_f64() {
                Some(x) => out.push(x),
                None => return Err(BootstrapError::invalid_input(NOT_NUMERIC)),
            },
            _ => return Err(BootstrapError::invalid_input(NOT_NUMERIC)),
        }
    }
    Ok(())
}

/// Normalizes `data` into a contiguous [`Dataset`], preserving order.
///
/// Applies the same validation as resampling. Use [`Dataset::sorted`] when
/// an ordered view is needed.
pub fn antithetic<I, T>(data: I) -> Result<Dataset>
where
    I: IntoIterator<Item = T>,
    T: Into<f64>,
{
    Dataset::try_from_iter(data)
}
