// ⚠️ Error kinds for the command pipeline
//
// ValueError   - a field value broke its constraint (carries the constraint message)
// ParseError   - the command text could not be turned into a Command
// CommandError - the command was well formed but invalid against current state
// ModelError   - a store precondition was broken (a bug, not user input)
// LogicError   - what the dispatch boundary hands back to the view

use thiserror::Error;

/// A value type rejected its input. `message` is the rule that was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    pub message: String,
}

impl ValueError {
    pub fn new(message: impl Into<String>) -> Self {
        ValueError {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseError(pub String);

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<ValueError> for ParseError {
    fn from(err: ValueError) -> Self {
        ParseError(err.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,

    #[error("Person not found in the address book")]
    PersonNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CommandError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CommandError::Invalid(message.into())
    }
}

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0:#}")]
    Storage(#[source] anyhow::Error),
}

impl LogicError {
    /// True for failures caused by the user's input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, LogicError::Storage(_))
    }
}
