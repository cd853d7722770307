//! Error types for vollab.
//!
//! Every fallible operation in the crate reports one of these variants. A
//! failure is always local to the user action that triggered it: callers show
//! the message and abandon the action, nothing here is fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vollab operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Identity Errors ===
    /// Credentials were rejected.
    #[error("authentication failed: {reason}")]
    AuthRejected {
        /// Why the credentials were rejected.
        reason: String,
    },

    /// Signup password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    // === Data Errors ===
    /// No lab with the given id exists in the store.
    #[error("lab not found: {id}")]
    LabNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Two labs were given the same id.
    #[error("duplicate lab id: {id}")]
    DuplicateLabId {
        /// The repeated id.
        id: String,
    },

    /// A required form field was left blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the blank field.
        field: &'static str,
    },

    /// A value could not be parsed into a known variant.
    #[error("unknown {kind}: '{value}'")]
    UnknownVariant {
        /// What was being parsed (region, status, ...).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    // === Navigation Errors ===
    /// The requested screen transition is not allowed from the current view.
    #[error("cannot {action} from {from}")]
    InvalidTransition {
        /// Name of the current view.
        from: &'static str,
        /// The attempted action.
        action: &'static str,
    },

    /// A dashboard action was attempted without the state it needs.
    #[error("invalid dashboard action: {message}")]
    InvalidAction {
        /// Description of what was missing.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The configuration file does not exist.
    #[error("configuration file not found: {path}")]
    ConfigMissing {
        /// Path that was checked.
        path: PathBuf,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for vollab operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an authentication rejection.
    #[must_use]
    pub fn auth(reason: impl Into<String>) -> Self {
        Self::AuthRejected {
            reason: reason.into(),
        }
    }

    /// Create a not-found error for a lab id.
    #[must_use]
    pub fn lab_not_found(id: impl Into<String>) -> Self {
        Self::LabNotFound { id: id.into() }
    }

    /// Create an invalid dashboard action error.
    #[must_use]
    pub fn invalid_action(message: impl Into<String>) -> Self {
        Self::InvalidAction {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a credential rejection.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthRejected { .. })
    }

    /// Check if this error reports a missing lab.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LabNotFound { .. })
    }

    /// Check if this error is a rejected screen transition.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
