//! Form rendering error types.

use thiserror::Error;

/// Errors produced while rendering custom types and form documents.
///
/// Builders and serializers never fail; only dispatch through the
/// [`CustomTypeRegistry`](crate::registry::CustomTypeRegistry) and document
/// parsing can.
#[derive(Debug, Error)]
pub enum FormError {
    /// No renderer has been registered under the requested name.
    #[error("custom type '{name}' not registered")]
    UnregisteredType { name: String },

    /// The custom renderer itself failed. Its error is passed through as-is.
    #[error(transparent)]
    Renderer(#[from] anyhow::Error),

    /// A declarative form document could not be parsed.
    #[error("invalid form document: {0}")]
    Document(#[from] serde_json::Error),
}

impl FormError {
    /// The custom type name carried by an unregistered-type error.
    pub fn unregistered_name(&self) -> Option<&str> {
        match self {
            FormError::UnregisteredType { name } => Some(name),
            _ => None,
        }
    }
}

/// Result type alias using FormError.
pub type FormResult<T> = Result<T, FormError>;
