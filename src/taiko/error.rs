use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

use crate::model::mode::ConvertError;

/// Error when chart objects cannot be turned into difficulty objects.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum TimelineError {
    /// The clock rate was not a positive finite number.
    InvalidClockRate(f64),
    /// An object starts at NaN or an infinite time.
    NonFiniteStartTime {
        idx: usize,
    },
    /// An object starts before its predecessor.
    Unsorted {
        idx: usize,
        start_time: f64,
        prev_start_time: f64,
    },
}

impl StdError for TimelineError {}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidClockRate(clock_rate) => write!(f, "invalid clock rate {clock_rate}"),
            Self::NonFiniteStartTime { idx } => {
                write!(f, "object at index {idx} has a non-finite start time")
            }
            Self::Unsorted {
                idx,
                start_time,
                prev_start_time,
            } => write!(
                f,
                "object at index {idx} starts at {start_time}ms \
                but its predecessor starts at {prev_start_time}ms"
            ),
        }
    }
}

/// Any error that can occur while calculating stamina values of a map.
#[derive(Debug)]
#[non_exhaustive]
pub enum StaminaError {
    Parse(io::Error),
    Convert(ConvertError),
    Timeline(TimelineError),
}

impl StdError for StaminaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Convert(err) => Some(err),
            Self::Timeline(err) => Some(err),
        }
    }
}

impl Display for StaminaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Parse(_) => f.write_str("failed to parse beatmap"),
            Self::Convert(_) => f.write_str("failed to convert beatmap"),
            Self::Timeline(_) => f.write_str("invalid object timeline"),
        }
    }
}

impl From<io::Error> for StaminaError {
    fn from(err: io::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConvertError> for StaminaError {
    fn from(err: ConvertError) -> Self {
        Self::Convert(err)
    }
}

impl From<TimelineError> for StaminaError {
    fn from(err: TimelineError) -> Self {
        Self::Timeline(err)
    }
}
