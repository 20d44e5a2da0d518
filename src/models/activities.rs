use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

// Catalog order is the server's insertion order and drives both the card
// list and the selector, so it has to survive decoding.
pub type Catalog = IndexMap<String, ActivityRecord>;

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default, deserialize_with = "participants_or_empty")]
    pub participants: Vec<String>,
}

// An entry with a broken participants field degrades to an empty list
// instead of failing the whole catalog.
fn participants_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(identifier) => identifier,
            // Non-string identifiers keep their slot (the count feeds the
            // spots-left math) but render with the fallback badge.
            _ => String::new(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_preserves_server_order() {
        let raw = r#"{
            "Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": []},
            "Art Studio": {"description": "d", "schedule": "s", "max_participants": 8, "participants": []},
            "Band": {"description": "d", "schedule": "s", "max_participants": 20, "participants": []}
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(names, ["Chess Club", "Art Studio", "Band"]);
    }

    #[test]
    fn missing_participants_decodes_as_empty() {
        let raw = r#"{"description": "d", "schedule": "s", "max_participants": 5}"#;
        let record: ActivityRecord = serde_json::from_str(raw).unwrap();
        assert!(record.participants.is_empty());
    }

    #[test]
    fn non_array_participants_decodes_as_empty() {
        let raw =
            r#"{"description": "d", "schedule": "s", "max_participants": 5, "participants": "oops"}"#;
        let record: ActivityRecord = serde_json::from_str(raw).unwrap();
        assert!(record.participants.is_empty());

        let raw =
            r#"{"description": "d", "schedule": "s", "max_participants": 5, "participants": null}"#;
        let record: ActivityRecord = serde_json::from_str(raw).unwrap();
        assert!(record.participants.is_empty());
    }

    #[test]
    fn non_string_participant_keeps_its_slot() {
        let raw = r#"{"description": "d", "schedule": "s", "max_participants": 5, "participants": ["a@x.com", 42]}"#;
        let record: ActivityRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.participants, ["a@x.com", ""]);
    }
}
