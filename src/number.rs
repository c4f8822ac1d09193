//! Wire form of float fields.
//!
//! Clients and the hand-written JSON fixtures use `16`, not `16.0`, for
//! whole-valued sizes. Integral floats are therefore written as integers;
//! anything else uses serde_json's shortest round-trip form.

use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::Deserialize;

// Above 2^53 not every integer is an f64, so writing one as an integer
// could claim precision the value never had.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

pub(crate) fn serialize_float<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!(
            "float value {} has no JSON representation",
            value
        )));
    }
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// `#[serde(with = "...")]` adapter for `Option<f64>` fields.
pub(crate) mod optional_float {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serialize_float(*v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<f64>::deserialize(deserializer)
    }
}
