use crate::errors::repository::RepositoryError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("ID mismatch")]
    IdMismatch,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    ReferentialIntegrity(String),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => match error.code.as_ref() {
                        "email" => "Invalid email format".to_string(),
                        "length" => format!("Invalid length for {field}"),
                        "range" => format!("Value out of range for {field}"),
                        _ => format!("Invalid {field}"),
                    },
                })
            })
            .collect();

        messages.sort();

        if messages.is_empty() {
            messages.push("Validation failed".to_string());
        }

        ServiceError::Validation(messages)
    }
}
