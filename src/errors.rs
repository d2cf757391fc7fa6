use thiserror::Error;

use crate::Unit;

/// Errors returned when constructing a `SplitSecond`.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("tick count ({ticks}) is a whole second or more at {unit} resolution")]
    TickOutOfRange { ticks: u32, unit: Unit },
}
