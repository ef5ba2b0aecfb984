//! Error types shared across the service.

use thiserror::Error;

/// Errors raised by a chat-completion backend.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The request never produced an HTTP response (connection, DNS, TLS)
    #[error("Failed to send request to completion API: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("Completion API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body was not a valid chat completion
    #[error("Failed to parse completion response: {0}")]
    Parse(String),

    /// The completion had no choices or no content
    #[error("Completion response contained no content")]
    Empty,
}

/// Errors raised while serving a translation request.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// The request was rejected before any completion call
    #[error("Invalid request: {0}")]
    Validation(String),

    /// A completion call failed; the whole request fails with it
    #[error("Translation failed: {0}")]
    Completion(#[from] CompletionError),

    /// A translation task panicked or was cancelled
    #[error("Translation task failed: {0}")]
    Task(String),
}

impl TranslateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
