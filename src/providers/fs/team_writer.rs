use std::path::{Path, PathBuf};

use crate::{
    errors::{AppError, IOError},
    providers::{
        fs::path::get_team_descriptor_file_path,
        team_writer::{TeamInput, TeamWriter},
    },
    shapes::team::TeamEntry,
};
use async_trait::async_trait;
use serde_json::to_vec_pretty;
use tokio::fs::write;
use uuid::Uuid;

pub struct FileSystemTeamWriter(PathBuf);

impl FileSystemTeamWriter {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }

    async fn save_team_file(team: &TeamEntry, base_path: &Path) -> Result<(), AppError> {
        let path = get_team_descriptor_file_path(base_path, &team.id)?;
        let json = to_vec_pretty(team).map_err(|e| AppError::IO(IOError::from(e)))?;
        write(&path, json)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        Ok(())
    }
}

#[async_trait]
impl TeamWriter for FileSystemTeamWriter {
    async fn save(&self, input: TeamInput) -> Result<TeamEntry, AppError> {
        let team = match input {
            TeamInput::New {
                name,
                logo,
                email,
                contact_number,
                players,
            } => TeamEntry {
                name,
                logo,
                email,
                contact_number,
                players,
                id: Uuid::new_v4(),
            },
            TeamInput::Existing(team) => team,
        };
        Self::save_team_file(&team, &self.0).await?;
        Ok(team)
    }
}
