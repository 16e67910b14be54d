use crate::errors::AppError;
use async_trait::async_trait;

/// Picker producing an opaque logo reference. `None` means the user
/// dismissed the picker without choosing.
#[async_trait]
pub trait ImageSource {
    async fn pick_logo(&self) -> Result<Option<String>, AppError>;
}

/// Picker producing a contact phone number from the device address book.
#[async_trait]
pub trait ContactSource {
    async fn pick_contact(&self) -> Result<Option<String>, AppError>;
}

/// Speech-to-text capture producing a spoken team name.
#[async_trait]
pub trait SpeechSource {
    async fn capture_text(&self) -> Result<Option<String>, AppError>;
}
