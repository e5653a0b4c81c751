//! Decoding helpers for store-shaped JSON.

use common::RecordId;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default.
///
/// Stores often initialise collections and flags to `null` instead of
/// leaving the key out.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a flag that is on unless the store says otherwise; `null` keeps
/// it on.
pub(crate) fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub(crate) fn default_true() -> bool {
    true
}

/// A reference to another document, either as its bare id or populated.
#[derive(Deserialize)]
#[serde(untagged)]
enum Reference {
    Id(RecordId),
    Populated {
        #[serde(default, alias = "_id")]
        id: Option<RecordId>,
    },
    Other(IgnoredAny),
}

/// Decodes a reference field into the referenced id.
///
/// Accepts `"b1"`, `{"_id": "b1", ...}` and `{"id": "b1", ...}`. Anything
/// else, `null` included, is no reference.
pub(crate) fn reference<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Reference>::deserialize(deserializer)? {
        Some(Reference::Id(id)) => Some(id),
        Some(Reference::Populated { id }) => id,
        Some(Reference::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Linked {
        #[serde(default, deserialize_with = "reference")]
        booking: Option<RecordId>,
        #[serde(default = "default_true", deserialize_with = "null_as_true")]
        active: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        count: u64,
    }

    fn decode(json: &str) -> Linked {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reference_accepts_bare_and_populated_ids() {
        assert_eq!(decode(r#"{"booking":"b1"}"#).booking, Some(RecordId::new("b1")));
        assert_eq!(
            decode(r#"{"booking":{"_id":"b2","date":"2024-06-10"}}"#).booking,
            Some(RecordId::new("b2"))
        );
        assert_eq!(decode(r#"{"booking":{"id":"b3"}}"#).booking, Some(RecordId::new("b3")));
    }

    #[test]
    fn reference_degrades_to_none() {
        assert_eq!(decode(r#"{"booking":null}"#).booking, None);
        assert_eq!(decode(r#"{"booking":42}"#).booking, None);
        assert_eq!(decode(r#"{"booking":{"date":"2024-06-10"}}"#).booking, None);
        assert_eq!(decode("{}").booking, None);
    }

    #[test]
    fn null_flags_and_counters_take_defaults() {
        let linked = decode(r#"{"active":null,"count":null}"#);
        assert!(linked.active);
        assert_eq!(linked.count, 0);

        let linked = decode(r#"{"active":false,"count":3}"#);
        assert!(!linked.active);
        assert_eq!(linked.count, 3);
    }
}
