//! This crate provides value types for the fractional part of a timestamp,
//! the portion smaller than one whole second, at millisecond, microsecond,
//! or nanosecond resolution.
//!
//! A [`SplitSecond`] pairs a [`Unit`] with a tick count that is validated at
//! construction and never changes afterward. Conversions between units use
//! integer math with truncation toward zero, so refining never fails and
//! coarsening discards sub-resolution ticks rather than rounding them.
//!
//! The only external boundary is `time::OffsetDateTime`: a `SplitSecond` can
//! be read from a datetime's microsecond field and written back into a copy
//! of one.

mod errors;
mod split_second;
mod unit;

pub use errors::Error;
pub use split_second::SplitSecond;
pub use unit::Unit;

const MILLIS_PER_SEC: u32 = 1_000;
const MICROS_PER_SEC: u32 = 1_000_000;
const NANOS_PER_SEC: u32 = 1_000_000_000;
