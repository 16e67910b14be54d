use crate::{constants::NO_CONTACT_SELECTED, shapes::team::TeamEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

/// Live, editable team record for a single editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
    pub logo: Option<String>,
    pub email: String,
    pub contact_number: String,
    pub roster: Vec<String>,
}

impl TeamDraft {
    pub fn empty() -> Self {
        TeamDraft {
            name: String::new(),
            logo: None,
            email: String::new(),
            contact_number: NO_CONTACT_SELECTED.to_string(),
            roster: Vec::new(),
        }
    }

    pub fn from_entry(team: &TeamEntry) -> Self {
        TeamDraft {
            name: team.name.clone(),
            logo: if team.logo.is_empty() {
                None
            } else {
                Some(team.logo.clone())
            },
            email: team.email.clone(),
            contact_number: team.contact_number.clone(),
            roster: team.players.clone(),
        }
    }
}

impl Default for TeamDraft {
    fn default() -> Self {
        TeamDraft::empty()
    }
}

/// Baseline taken when the session opens. Never mutated afterwards; the
/// dirty check compares the live draft against it.
#[derive(Debug, Clone)]
pub struct Snapshot(TeamDraft);

impl Snapshot {
    pub fn of(draft: &TeamDraft) -> Self {
        Snapshot(draft.clone())
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn logo(&self) -> Option<&str> {
        self.0.logo.as_deref()
    }

    pub fn contact_number(&self) -> &str {
        &self.0.contact_number
    }

    pub fn roster(&self) -> &[String] {
        &self.0.roster
    }

    pub fn restore(&self) -> TeamDraft {
        self.0.clone()
    }
}
