use crate::{errors::AppError, form::validation::ValidatedTeam, shapes::team::TeamEntry};
use async_trait::async_trait;
use uuid::Uuid;

/// `New` inserts under a fresh id; `Existing` updates in place.
pub enum TeamInput {
    New {
        name: String,
        logo: String,
        email: String,
        contact_number: String,
        players: Vec<String>,
    },
    Existing(TeamEntry),
}

impl TeamInput {
    pub fn from_validated(team: ValidatedTeam, existing_id: Option<Uuid>) -> Self {
        match existing_id {
            Some(id) => TeamInput::Existing(TeamEntry {
                name: team.name,
                logo: team.logo,
                email: team.email,
                contact_number: team.contact_number,
                players: team.players,
                id,
            }),
            None => TeamInput::New {
                name: team.name,
                logo: team.logo,
                email: team.email,
                contact_number: team.contact_number,
                players: team.players,
            },
        }
    }
}

#[async_trait]
pub trait TeamWriter {
    async fn save(&self, team: TeamInput) -> Result<TeamEntry, AppError>;
}
