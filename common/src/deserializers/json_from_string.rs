use serde::{
    de::{DeserializeOwned, Error, Visitor},
    Deserializer,
};

/// API Gateway proxy responses carry their payload as a JSON document encoded in a string.
struct EncodedJsonVisitor;

impl<'de> Visitor<'de> for EncodedJsonVisitor {
    type Value = serde_json::Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string holding a json document")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        serde_json::from_str(v).map_err(E::custom)
    }
}

/// Decodes a field whose value is a string containing JSON (the `body` of a lambda proxy
/// response) straight into `T`.
pub fn deserialize_json_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let decoded = deserializer.deserialize_str(EncodedJsonVisitor)?;
    serde_json::from_value::<T>(decoded).map_err(D::Error::custom)
}
