use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by teams and players.
///
/// Values are normalized on construction: surrounding whitespace is trimmed
/// and anything that parses as a base-10 integer is stored in canonical
/// decimal form, so `"02"`, `"+2"` and `2` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(normalize(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed.parse::<i64>() {
        Ok(number) => number.to_string(),
        Err(_) => trimmed.to_owned(),
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "team")]
    pub name: String,
    pub location: String,
    pub id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub id: EntityId,
    #[serde(rename = "teamID")]
    pub team_id: EntityId,
}

impl Player {
    pub fn plays_for(&self, team_id: &EntityId) -> bool {
        &self.team_id == team_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_identifiers_are_canonicalized() {
        assert_eq!(EntityId::new(" 02 "), EntityId::from(2));
        assert_eq!(EntityId::new("+2").as_str(), "2");
        assert_eq!(EntityId::new("-0").as_str(), "0");
    }

    #[test]
    fn non_numeric_identifiers_are_trimmed_only() {
        assert_eq!(EntityId::new("  abc ").as_str(), "abc");
        assert_eq!(EntityId::new("2a").as_str(), "2a");
        assert_ne!(EntityId::new("2a"), EntityId::from(2));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let player = Player {
            name: "Aaron Rodgers".to_string(),
            id: EntityId::from(0),
            team_id: EntityId::new("00"),
        };

        let value = serde_json::to_value(&player).expect("player should serialize");

        assert_eq!(
            value,
            serde_json::json!({ "name": "Aaron Rodgers", "id": "0", "teamID": "0" })
        );
    }

    #[test]
    fn deserialization_normalizes_identifiers() {
        let team: Team = serde_json::from_value(serde_json::json!({
            "team": "Bears",
            "location": "Chicago",
            "id": " 05"
        }))
        .expect("team should deserialize");

        assert_eq!(team.id, EntityId::from(5));
        assert_eq!(team.name, "Bears");
    }
}
