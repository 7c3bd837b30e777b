use serde::Serialize;

/// Message shown on the login view whenever authentication is rejected.
pub const LOGIN_FAILED_MESSAGE: &str = "Identifiants incorrects. Veuillez réessayer.";

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Other error: {0}")]
    Other(
        #[from]
        #[serde(skip)]
        anyhow::Error,
    ),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl ServiceError {
    /// Returns the message suitable for display.
    /// Authentication failures collapse to one generic message so the login
    /// view never reveals which credential was wrong.
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthError(_) => LOGIN_FAILED_MESSAGE.to_string(),
            Self::SerializationError(_) | Self::Other(_) => "Erreur interne".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidInput(_))
    }
}
