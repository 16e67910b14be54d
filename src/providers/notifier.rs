use crate::errors::AppError;
use async_trait::async_trait;

/// Fire-and-forget notification dispatched after a successful save. The
/// outcome is logged by the caller and never surfaced to the user.
#[async_trait]
pub trait TeamNotifier {
    async fn notify_team_saved(
        &self,
        team_name: &str,
        user_email: &str,
        was_edit: bool,
    ) -> Result<(), AppError>;
}
