use fairway_core::{CourseError, LocationError, RoundError};

pub mod records;
pub mod session;

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum SessionError {
    #[error("Unknown club: {0}")]
    UnknownClub(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Course(#[from] CourseError),
}
