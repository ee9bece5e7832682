use serde::de::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Set `deserialize_with` to this fn to get the default if null.
/// See <https://github.com/serde-rs/serde/issues/1098#issuecomment-760711617>
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// A postal code as the random-user API sends it. Depending on the
/// nationality it's a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Postcode {
    Text(String),
    Number(Number),
    #[default]
    Absent,
}

impl Postcode {
    /// Resolves the postcode to the string stored on an address.
    pub(crate) fn into_string(self) -> String {
        match self {
            Postcode::Text(text) => text,
            Postcode::Number(number) => number.to_string(),
            Postcode::Absent => String::new(),
        }
    }
}

impl From<Value> for Postcode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Postcode::Text(text),
            Value::Number(number) => Postcode::Number(number),
            _ => Postcode::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for Postcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Postcode::from)
    }
}
