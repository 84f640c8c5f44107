//! Serde helpers that store byte buffers as Base-85 strings.
//!
//! ```
//! # use serde::{Deserialize, Serialize};
//! #[derive(Serialize, Deserialize)]
//! struct Blob {
//!     #[serde(with = "base85::text::serde")]
//!     payload: Vec<u8>,
//! }
//! ```
//!
//! The module-level [`serialize`] / [`deserialize`] pair uses
//! [`Encoding::DEFAULT`]. Use [`serialize_with`] / [`deserialize_with`] from
//! a wrapper function to pick another encoding.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use crate::codec;
use crate::encoding::Encoding;

/// Serialize `bytes` as a string in the default encoding.
pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]> + ?Sized,
    S: Serializer,
{
    serialize_with(bytes.as_ref(), &Encoding::DEFAULT, serializer)
}

/// Deserialize a string in the default encoding.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_with(&Encoding::DEFAULT, deserializer)
}

/// Serialize `bytes` as a string in `encoding`.
pub fn serialize_with<S>(bytes: &[u8], encoding: &Encoding, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let encoded = codec::encode(bytes, encoding);
    match std::str::from_utf8(&encoded) {
        Ok(text) => serializer.serialize_str(text),
        Err(_) => serializer.serialize_bytes(&encoded),
    }
}

/// Deserialize a string in `encoding`.
pub fn deserialize_with<'de, D>(encoding: &Encoding, deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(Base85Visitor { encoding })
}

struct Base85Visitor<'a> {
    encoding: &'a Encoding,
}

impl Visitor<'_> for Base85Visitor<'_> {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a Base-85 encoded string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        codec::decode(v, self.encoding).map_err(|e| E::custom(format!("invalid Base-85 data: {e}")))
    }
}
