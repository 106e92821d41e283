pub mod schedule;

use thiserror::Error;

use crate::clock::ClockParseError;
use crate::model::ModelError;

pub use schedule::{board_from_document, parse_schedule, parse_schedule_with_view};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field}: {source}")]
    Clock {
        field: String,
        #[source]
        source: ClockParseError,
    },
    #[error("{field}: past the end of the day")]
    OutOfDay { field: String },
    #[error("work order {0} has neither an end time nor a duration")]
    MissingEnd(u64),
    #[error("work order {0} has both an end time and a duration")]
    ConflictingEnd(u64),
    #[error("work order {0} ends after midnight")]
    PastMidnight(u64),
    #[error(transparent)]
    Model(#[from] ModelError),
}
