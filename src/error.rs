use thiserror::Error;

use crate::models::{DayType, StudioKind};

// Lookup failures only. Blocked flow transitions are not errors,
// they surface as disabled affordances (see controllers::booking).
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("movie {0} not found")]
    MovieNotFound(i64),

    #[error("schedule {0} not found")]
    ScheduleNotFound(i64),

    #[error("studio {0} not found")]
    StudioNotFound(i64),

    #[error("seat {0} not found")]
    SeatNotFound(String),

    #[error("no price rule for {kind} / {day}")]
    PriceRuleMissing { kind: StudioKind, day: DayType },

    #[error("invalid email or password")]
    InvalidCredentials,
}

pub type Result<T> = std::result::Result<T, Error>;
