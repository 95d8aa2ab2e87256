//! String (de)serialization for [`Ulid`].
//!
//! A `Ulid` serializes as its canonical 26-character form. Deserialization
//! runs the same validation as [`Ulid::decode`], so malformed input is
//! rejected with the decode error as the message.

use crate::Ulid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Ulid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.encode().as_str())
    }
}

impl<'de> Deserialize<'de> for Ulid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base32Visitor;

        impl serde::de::Visitor<'_> for Base32Visitor {
            type Value = Ulid;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 26-character Crockford base32 string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ulid::decode(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(Base32Visitor)
    }
}

/// Serializes a [`Ulid`] as its raw `u128` instead of a string.
///
/// ```
/// use sortid::{Ulid, as_native_ulid};
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Row {
///     #[serde(with = "as_native_ulid")]
///     event_id: Ulid,
/// }
/// ```
pub mod as_native_ulid {
    use super::*;

    pub fn serialize<S>(id: &Ulid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Ulid, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(d).map(Ulid::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    #[test]
    fn ulid_serializes_as_string() {
        let id = Ulid::from_raw(42);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""0000000000000000000000001A""#);

        let back: Ulid = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn ulid_deserialize_rejects_invalid() {
        let err = serde_json::from_str::<Ulid>(r#""invalid-id""#).unwrap_err();
        assert!(err.to_string().contains("expected 26 characters"));

        assert!(serde_json::from_str::<Ulid>(r#""8ZZZZZZZZZZZZZZZZZZZZZZZZZ""#).is_err());
        assert!(serde_json::from_str::<Ulid>("42").is_err());
    }

    #[test]
    fn native_ulid_field() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_native_ulid")]
            event_id: Ulid,
        }
        let row = Row {
            event_id: Ulid::from_raw(42),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":42}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = Record::new("demo", 7);
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains(&format!(r#""id":"{}""#, record.id)));

        let back: Record = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
        assert_eq!(back.validate(), Ok(()));
    }
}
