use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use rosu_map::section::general::GameMode;

/// Error when a [`Beatmap`] cannot be turned into taiko objects.
///
/// [`Beatmap`]: rosu_map::Beatmap
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// Only maps that are already osu!taiko maps are supported.
    UnsupportedMode(GameMode),
}

impl StdError for ConvertError {}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnsupportedMode(mode) => {
                write!(f, "cannot convert {mode:?} map to taiko objects")
            }
        }
    }
}
