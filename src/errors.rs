use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

/// First violated save rule, in the fixed order the pipeline checks them.
/// Expected outcome of a save attempt, not an exceptional condition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("team name is required")]
    NameRequired,
    #[error("a team with this name already exists")]
    NameNotUnique,
    #[error("team name must start with a capital letter")]
    NameMustBeCapitalized,
    #[error("team name must be at most 15 characters long")]
    NameTooLong,
    #[error("team logo is required")]
    LogoRequired,
    #[error("at least one player is required")]
    RosterEmpty,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("team contact number is required")]
    ContactRequired,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster is full: maximum number of players reached")]
    Full,
    #[error("no player at position {0}")]
    OutOfBounds(usize),
    #[error("delete ticket is no longer valid")]
    StaleTicket,
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Msg(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Msg(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::Serialization(e.to_string())
    }
}
