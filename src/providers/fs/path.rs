use crate::{
    constants::TEAM_DESCRIPTOR_FILE_NAME,
    errors::{AppError, IOError},
};
use dirs::home_dir;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use uuid::Uuid;

pub fn get_base_path() -> Result<PathBuf, AppError> {
    let mut path = home_dir().ok_or(AppError::IO(IOError::Msg(
        "could not recognize home directory".to_string(),
    )))?;
    path.push(".roster4all");
    if !path.exists() {
        create_dir_all(&path).map_err(|_| {
            AppError::IO(IOError::Msg("could not create app directory".to_string()))
        })?;
    }
    Ok(path)
}

pub fn get_team_folder_path(base_path: &Path, team_id: &Uuid) -> Result<PathBuf, AppError> {
    let p = base_path.join(team_id.to_string());
    create_dir_all(&p).map_err(|_| {
        AppError::IO(IOError::Msg("could not create team directory".to_string()))
    })?;
    Ok(p)
}

pub fn get_team_descriptor_file_path(base_path: &Path, team_id: &Uuid) -> Result<PathBuf, AppError> {
    let path = get_team_folder_path(base_path, team_id)?;
    Ok(path.join(TEAM_DESCRIPTOR_FILE_NAME))
}
