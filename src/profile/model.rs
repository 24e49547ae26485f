// Player profile model and upstream record validation.
//
// Upstream responses are untrusted JSON. A record becomes a PlayerProfile
// only when it carries a string `name` and a string `id` that parses as an
// identifier; everything else is reported as an EntryError and dropped by
// the caller rather than surfaced as a partial profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::identifier::parse_identifier;

/// A resolved player: identifier, display name, and optional property blob.
///
/// `properties` is `None` when the upstream record did not include them
/// (name lookups never do). That is distinct from `Some(vec![])`, which
/// means the upstream explicitly reported no properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    id: Uuid,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Vec<Value>>,
}

/// Why a single upstream record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("profile entry is not a JSON object")]
    NotAnObject,
    #[error("profile entry is missing field `{0}`")]
    MissingField(&'static str),
    #[error("profile entry field `{0}` is not a string")]
    WrongType(&'static str),
    #[error("invalid player identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// Why a whole batch response was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("batch response is not a JSON array")]
    NotAnArray,
    #[error("batch response entry {index} is not a JSON object")]
    NonObjectEntry { index: usize },
}

/// Loosely-typed view of one upstream record. Every field is optional so
/// that validation can name exactly what was missing or mistyped.
#[derive(Deserialize)]
struct ProfileRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    properties: Option<Value>,
}

impl PlayerProfile {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            properties: None,
        }
    }

    /// Attach a property array, as returned by the session server.
    pub fn with_properties(mut self, properties: Vec<Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque property array, or `None` if it was never fetched.
    pub fn properties(&self) -> Option<&[Value]> {
        self.properties.as_deref()
    }

    /// Validate one upstream JSON record and build a profile from it.
    ///
    /// A `properties` field that is present but not an array is ignored,
    /// leaving the profile without properties.
    pub fn from_record(value: Value) -> Result<Self, EntryError> {
        if !value.is_object() {
            return Err(EntryError::NotAnObject);
        }

        let record = ProfileRecord::deserialize(value).map_err(|_| EntryError::NotAnObject)?;

        let name = match record.name {
            Some(Value::String(name)) => name,
            Some(Value::Null) | None => return Err(EntryError::MissingField("name")),
            Some(_) => return Err(EntryError::WrongType("name")),
        };

        let id = match record.id {
            Some(Value::String(raw)) => parse_identifier(&raw)?,
            Some(Value::Null) | None => return Err(EntryError::MissingField("id")),
            Some(_) => return Err(EntryError::WrongType("id")),
        };

        let properties = match record.properties {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        };

        Ok(Self {
            id,
            name,
            properties,
        })
    }
}

/// Parse a batch lookup response into profiles.
///
/// The top level must be an array. A non-object entry anywhere rejects the
/// whole batch; object entries that fail validation are skipped.
pub fn parse_profile_batch(value: Value) -> Result<Vec<PlayerProfile>, BatchError> {
    let Value::Array(entries) = value else {
        return Err(BatchError::NotAnArray);
    };

    let mut profiles = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            return Err(BatchError::NonObjectEntry { index });
        }
        match PlayerProfile::from_record(entry) {
            Ok(profile) => profiles.push(profile),
            Err(e) => debug!(index, error = %e, "Skipping invalid profile entry"),
        }
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_minimal() {
        let profile = PlayerProfile::from_record(json!({
            "name": "Notch",
            "id": "069a79f444e94726a5befca90e38aaf5"
        }))
        .unwrap();
        assert_eq!(profile.name(), "Notch");
        assert_eq!(
            profile.id().to_string(),
            "069a79f4-44e9-4726-a5be-fca90e38aaf5"
        );
        assert!(profile.properties().is_none());
    }

    #[test]
    fn test_from_record_missing_and_mistyped_fields() {
        assert_eq!(
            PlayerProfile::from_record(json!({"id": "069a79f444e94726a5befca90e38aaf5"})),
            Err(EntryError::MissingField("name"))
        );
        assert_eq!(
            PlayerProfile::from_record(json!({"name": "Notch"})),
            Err(EntryError::MissingField("id"))
        );
        assert_eq!(
            PlayerProfile::from_record(json!({"name": 7, "id": "069a79f444e94726a5befca90e38aaf5"})),
            Err(EntryError::WrongType("name"))
        );
        assert_eq!(
            PlayerProfile::from_record(json!({"name": "Notch", "id": 42})),
            Err(EntryError::WrongType("id"))
        );
    }

    #[test]
    fn test_from_record_rejects_non_object() {
        assert_eq!(
            PlayerProfile::from_record(json!(["Notch", "069a79f444e94726a5befca90e38aaf5"])),
            Err(EntryError::NotAnObject)
        );
    }

    #[test]
    fn test_non_array_properties_ignored() {
        let profile = PlayerProfile::from_record(json!({
            "name": "Notch",
            "id": "069a79f444e94726a5befca90e38aaf5",
            "properties": {"textures": "abc"}
        }))
        .unwrap();
        assert!(profile.properties().is_none());
    }

    #[test]
    fn test_batch_non_object_entry_rejects_batch() {
        let result = parse_profile_batch(json!([
            {"name": "Notch", "id": "069a79f444e94726a5befca90e38aaf5"},
            "jeb_"
        ]));
        assert_eq!(result, Err(BatchError::NonObjectEntry { index: 1 }));
    }
}
