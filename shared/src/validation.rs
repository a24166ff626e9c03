use crate::models::CreatePoolRequest;

pub const MAX_TITLE_LENGTH: usize = 100;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Title exceeds maximum length of {MAX_TITLE_LENGTH}")]
    TitleTooLong,
}

pub fn validate_pool_request(request: &CreatePoolRequest) -> Result<(), ValidationError> {
    if request.title.trim().is_empty() { return Err(ValidationError::EmptyTitle); }
    if request.title.chars().count() > MAX_TITLE_LENGTH { return Err(ValidationError::TitleTooLong); }
    Ok(())
}
