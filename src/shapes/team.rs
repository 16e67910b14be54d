use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted team record. The id is derived from the storage folder name
/// and never serialized into the descriptor file itself.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TeamEntry {
    pub name: String,
    pub logo: String,
    pub email: String,
    pub contact_number: String,
    pub players: Vec<String>,
    #[serde(skip_serializing, skip_deserializing)]
    pub id: Uuid,
}

impl TeamEntry {
    pub fn find_player(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p == name)
    }
}
