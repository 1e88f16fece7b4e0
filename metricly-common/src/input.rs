//! The array-like input model.
//!
//! Callers hand formulas loosely-typed batches of measurements: a scalar, a
//! flat list, a nested table, or a raw JSON value. [`ArrayLike`] captures all
//! of those and [`ArrayLike::to_values`] normalizes them into one flat
//! `Vec<f64>` before any validation happens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{MetricError, Result};

/// A value that may or may not be convertible to a sequence of `f64`.
///
/// Deserializes from any JSON value. Only numbers, booleans and rectangular
/// sequences of those coerce successfully; everything else is kept so that
/// the rejection happens at the coercion step with a uniform error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayLike {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Vec<ArrayLike>),
    Mapping(BTreeMap<String, ArrayLike>),
}

impl ArrayLike {
    /// Flatten into row-major `f64` values.
    ///
    /// A scalar becomes a one-element vector and `true`/`false` become
    /// `1.0`/`0.0`. Nested sequences must be rectangular.
    ///
    /// # Errors
    /// [`MetricError::TypeConversion`] for null, text, mappings, non-finite
    /// numbers and ragged nesting.
    pub fn to_values(&self) -> Result<Vec<f64>> {
        let mut values = Vec::new();
        match self.flatten_into(&mut values) {
            Ok(_) => Ok(values),
            Err(reason) => {
                debug!(reason, "input is not a numeric array");
                Err(MetricError::TypeConversion)
            }
        }
    }

    /// Push this value's elements onto `out` and return its shape.
    fn flatten_into(&self, out: &mut Vec<f64>) -> std::result::Result<Vec<usize>, &'static str> {
        match self {
            ArrayLike::Number(x) if x.is_finite() => {
                out.push(*x);
                Ok(Vec::new())
            }
            ArrayLike::Number(_) => Err("non-finite number"),
            ArrayLike::Bool(b) => {
                out.push(if *b { 1.0 } else { 0.0 });
                Ok(Vec::new())
            }
            ArrayLike::Null => Err("null"),
            ArrayLike::Text(_) => Err("text"),
            ArrayLike::Mapping(_) => Err("mapping"),
            ArrayLike::Sequence(items) => {
                let mut inner: Option<Vec<usize>> = None;
                for item in items {
                    let shape = item.flatten_into(out)?;
                    match &inner {
                        None => inner = Some(shape),
                        Some(expected) if *expected != shape => return Err("ragged nested sequence"),
                        Some(_) => {}
                    }
                }
                let mut shape = vec![items.len()];
                shape.extend(inner.unwrap_or_default());
                Ok(shape)
            }
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ArrayLike {
                fn from(value: $t) -> Self {
                    ArrayLike::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for ArrayLike {
    fn from(value: bool) -> Self {
        ArrayLike::Bool(value)
    }
}

impl From<&str> for ArrayLike {
    fn from(value: &str) -> Self {
        ArrayLike::Text(value.to_string())
    }
}

impl From<String> for ArrayLike {
    fn from(value: String) -> Self {
        ArrayLike::Text(value)
    }
}

impl<T: Into<ArrayLike>> From<Option<T>> for ArrayLike {
    fn from(value: Option<T>) -> Self {
        value.map_or(ArrayLike::Null, Into::into)
    }
}

impl<T: Into<ArrayLike>> From<Vec<T>> for ArrayLike {
    fn from(values: Vec<T>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ArrayLike>, const N: usize> From<[T; N]> for ArrayLike {
    fn from(values: [T; N]) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<ArrayLike>> From<&[T]> for ArrayLike {
    fn from(values: &[T]) -> Self {
        ArrayLike::Sequence(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ArrayLike {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ArrayLike::Null,
            Value::Bool(b) => ArrayLike::Bool(b),
            // Every JSON number has an f64 reading; large integers lose precision.
            Value::Number(n) => n.as_f64().map_or(ArrayLike::Null, ArrayLike::Number),
            Value::String(s) => ArrayLike::Text(s),
            Value::Array(items) => items.into(),
            Value::Object(map) => {
                ArrayLike::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
