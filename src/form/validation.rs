use crate::{
    constants::{MAX_TEAM_NAME_LENGTH, NO_CONTACT_SELECTED},
    errors::ValidationError,
    form::draft::{Mode, Snapshot, TeamDraft},
    providers::{email::EmailFormatChecker, oracle::UniquenessOracle},
};

/// A draft that passed every save rule, with the logo in its persisted
/// string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTeam {
    pub name: String,
    pub logo: String,
    pub email: String,
    pub contact_number: String,
    pub players: Vec<String>,
}

/// Runs the save rules in a fixed order and stops at the first violation.
/// The order determines which single error the host reports when several
/// fields are invalid at once.
pub struct ValidationPipeline<'a> {
    oracle: &'a dyn UniquenessOracle,
    email_checker: &'a dyn EmailFormatChecker,
}

impl<'a> ValidationPipeline<'a> {
    pub fn new(oracle: &'a dyn UniquenessOracle, email_checker: &'a dyn EmailFormatChecker) -> Self {
        ValidationPipeline {
            oracle,
            email_checker,
        }
    }

    pub fn validate(
        &self,
        draft: &TeamDraft,
        mode: Mode,
        snapshot: &Snapshot,
    ) -> Result<ValidatedTeam, ValidationError> {
        if draft.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if (mode == Mode::Create || draft.name != snapshot.name())
            && !self.oracle.is_name_unique(&draft.name)
        {
            return Err(ValidationError::NameNotUnique);
        }
        if is_latin(&draft.name) && !starts_with_uppercase(&draft.name) {
            return Err(ValidationError::NameMustBeCapitalized);
        }
        if draft.name.chars().count() > MAX_TEAM_NAME_LENGTH {
            return Err(ValidationError::NameTooLong);
        }
        let logo = match &draft.logo {
            Some(logo) => logo.clone(),
            None => return Err(ValidationError::LogoRequired),
        };
        if draft.roster.is_empty() {
            return Err(ValidationError::RosterEmpty);
        }
        if !self.email_checker.is_valid_format(&draft.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if draft.contact_number == NO_CONTACT_SELECTED {
            return Err(ValidationError::ContactRequired);
        }
        Ok(ValidatedTeam {
            name: draft.name.clone(),
            logo,
            email: draft.email.clone(),
            contact_number: draft.contact_number.clone(),
            players: draft.roster.clone(),
        })
    }
}

// Names containing any non-Latin character are exempt from the
// capitalization rule.
fn is_latin(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

fn starts_with_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}
