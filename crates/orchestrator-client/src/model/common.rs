// Common model types

use orchestrator_http::envelope::{json_kind, number_to_i64};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nullable integer as serialized by orchestrator: `{"Int64": 12, "Valid": true}`.
///
/// Plain numbers (integer or float) and `null` are accepted as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NullInt64 {
    #[serde(rename = "Int64")]
    pub int64: i64,
    #[serde(rename = "Valid")]
    pub valid: bool,
}

impl NullInt64 {
    pub fn new(value: i64) -> Self {
        Self {
            int64: value,
            valid: true,
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<i64> {
        self.valid.then_some(self.int64)
    }
}

impl From<Option<i64>> for NullInt64 {
    fn from(value: Option<i64>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for NullInt64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::null()),
            Value::Number(n) => number_to_i64(&n)
                .map(Self::new)
                .ok_or_else(|| de::Error::custom(format!("integer out of range: {n}"))),
            Value::Object(map) => {
                let int64 = match map.get("Int64") {
                    None | Some(Value::Null) => 0,
                    Some(Value::Number(n)) => number_to_i64(n)
                        .ok_or_else(|| de::Error::custom(format!("integer out of range: {n}")))?,
                    Some(other) => {
                        return Err(de::Error::custom(format!(
                            "expected number for Int64, found {}",
                            json_kind(other)
                        )));
                    }
                };
                let valid = map.get("Valid").and_then(Value::as_bool).unwrap_or(false);
                Ok(Self { int64, valid })
            }
            other => Err(de::Error::custom(format!(
                "expected nullable integer, found {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Decode `null` as the type's default, for collections orchestrator may send as null
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
