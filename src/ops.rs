use crate::{
    errors::{AppError, ValidationError},
    form::{
        draft::Mode,
        state::FormState,
        validation::ValidationPipeline,
    },
    logging::logger::{log_error, log_info},
    providers::{
        email::EmailFormatChecker,
        notifier::TeamNotifier,
        oracle::{InMemoryUniquenessOracle, UniquenessOracle},
        sources::{ContactSource, ImageSource, SpeechSource},
        team_reader::TeamReader,
        team_writer::{TeamInput, TeamWriter},
    },
    shapes::team::TeamEntry,
};
use uuid::Uuid;

/// Outcome of a save attempt. A rejected draft is an expected result, kept
/// apart from provider failures which surface as `AppError`.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(TeamEntry),
    Rejected(ValidationError),
}

pub fn create_session() -> FormState {
    FormState::new_create()
}

pub async fn edit_session<TR: TeamReader + Send + Sync>(
    reader: &TR,
    team_id: &Uuid,
) -> Result<FormState, AppError> {
    let team = reader.read_single(team_id).await?;
    Ok(FormState::new_edit(&team))
}

pub async fn load_uniqueness_oracle<TR: TeamReader + Send + Sync>(
    reader: &TR,
) -> Result<InMemoryUniquenessOracle, AppError> {
    let teams = reader.read_all().await?;
    Ok(InMemoryUniquenessOracle::new(&teams))
}

/// Validates the current draft and, if it passes, persists it and dispatches
/// the notification email. A Create save always notifies and resets the form
/// for the next session; an Edit save notifies only when the form was dirty
/// before saving and leaves the form untouched.
pub async fn save_team<TW, TN>(
    form: &mut FormState,
    oracle: &dyn UniquenessOracle,
    email_checker: &dyn EmailFormatChecker,
    writer: &TW,
    notifier: &TN,
) -> Result<SaveOutcome, AppError>
where
    TW: TeamWriter + Send + Sync,
    TN: TeamNotifier + Send + Sync,
{
    let was_dirty = form.is_dirty();
    let was_edit = form.mode() == Mode::Edit;
    let pipeline = ValidationPipeline::new(oracle, email_checker);
    let validated = match pipeline.validate(form.draft(), form.mode(), form.snapshot()) {
        Ok(team) => team,
        Err(e) => return Ok(SaveOutcome::Rejected(e)),
    };
    let input = TeamInput::from_validated(validated, form.team_id());
    let team = writer.save(input).await?;
    if !was_edit || was_dirty {
        match notifier
            .notify_team_saved(&team.name, &team.email, was_edit)
            .await
        {
            Ok(()) => log_info(&format!("notification email sent for team '{}'", team.name)),
            Err(e) => log_error(&format!(
                "could not send notification email for team '{}': {}",
                team.name, e
            )),
        }
    }
    if !was_edit {
        form.reset();
    }
    Ok(SaveOutcome::Saved(team))
}

/// Feeds a picked logo into the form. Returns whether anything was picked.
pub async fn pick_team_logo<S: ImageSource + Send + Sync>(
    form: &mut FormState,
    source: &S,
) -> Result<bool, AppError> {
    match source.pick_logo().await? {
        Some(logo) => {
            form.set_logo(Some(logo));
            Ok(true)
        }
        None => Ok(false),
    }
}

pub async fn pick_team_contact<S: ContactSource + Send + Sync>(
    form: &mut FormState,
    source: &S,
) -> Result<bool, AppError> {
    match source.pick_contact().await? {
        Some(contact_number) => {
            form.set_contact_number(contact_number);
            Ok(true)
        }
        None => Ok(false),
    }
}

pub async fn dictate_team_name<S: SpeechSource + Send + Sync>(
    form: &mut FormState,
    source: &S,
) -> Result<bool, AppError> {
    match source.capture_text().await? {
        Some(name) => {
            form.set_name(name);
            Ok(true)
        }
        None => Ok(false),
    }
}
