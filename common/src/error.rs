use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    /// A record cannot be created with a negative age.
    #[error("age cannot be negative: {0}")]
    NegativeAge(i64),

    #[error("input ended while waiting for {expected}")]
    EndOfInput { expected: &'static str },

    #[error("expected an integer, got '{input}'")]
    NotAnInteger { input: String },

    #[error("age {age} is too large to project forward")]
    AgeOverflow { age: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
