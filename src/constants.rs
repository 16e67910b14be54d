pub const TEAM_DESCRIPTOR_FILE_NAME: &str = "team.json";
pub const NO_CONTACT_SELECTED: &str = "no contact selected";
pub const MAX_ROSTER_SIZE: usize = 23;
pub const MAX_TEAM_NAME_LENGTH: usize = 15;
