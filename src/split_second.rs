use core::fmt::Display;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, Unit};

/// The sub-second fraction of a timestamp as a tick count in a fixed unit.
///
/// A `SplitSecond` is an immutable value: the tick count is validated against
/// the unit's range at construction and neither field can change afterward.
/// Conversions return a new value in the requested unit, dividing with
/// truncation toward zero when moving to a coarser unit and multiplying when
/// moving to a finer one. A finer result always fits because the source was
/// already below one whole second.
///
/// The size of a `SplitSecond` is always the same as a `u64`.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "UncheckedSplitSecond")
)]
pub struct SplitSecond {
    unit: Unit,
    ticks: u32,
}

impl SplitSecond {
    /// Return a `SplitSecond` holding `ticks` of the given unit.
    ///
    /// Fails with `Error::TickOutOfRange` if `ticks` amounts to one whole
    /// second or more at that unit's resolution. The tick count is stored
    /// exactly as given, with no normalization to another unit.
    pub fn new(unit: Unit, ticks: u32) -> Result<Self, Error> {
        if ticks > unit.max_in_second() {
            return Err(Error::TickOutOfRange { ticks, unit });
        }

        Ok(Self { unit, ticks })
    }

    /// Return a `SplitSecond` holding a whole number of milliseconds.
    pub fn from_millis(millis: u32) -> Result<Self, Error> {
        Self::new(Unit::Millisecond, millis)
    }

    /// Return a `SplitSecond` holding a whole number of microseconds.
    pub fn from_micros(micros: u32) -> Result<Self, Error> {
        Self::new(Unit::Microsecond, micros)
    }

    /// Return a `SplitSecond` holding a whole number of nanoseconds.
    pub fn from_nanos(nanos: u32) -> Result<Self, Error> {
        Self::new(Unit::Nanosecond, nanos)
    }

    /// Read the sub-second fraction of a datetime as whole microseconds.
    pub fn from_datetime(datetime: &OffsetDateTime) -> Self {
        // the microsecond component is always below one second
        Self {
            unit: Unit::Microsecond,
            ticks: datetime.microsecond(),
        }
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Convert to whole milliseconds, truncating toward zero.
    pub fn to_millis(&self) -> Self {
        match self.unit {
            Unit::Millisecond => *self,
            Unit::Microsecond => Self {
                unit: Unit::Millisecond,
                ticks: self.ticks / 1_000,
            },
            Unit::Nanosecond => Self {
                unit: Unit::Millisecond,
                ticks: self.ticks / 1_000_000,
            },
        }
    }

    /// Convert to whole microseconds. Nanosecond ticks below microsecond
    /// resolution are truncated toward zero.
    pub fn to_micros(&self) -> Self {
        match self.unit {
            Unit::Millisecond => Self {
                unit: Unit::Microsecond,
                ticks: self.ticks * 1_000,
            },
            Unit::Microsecond => *self,
            Unit::Nanosecond => Self {
                unit: Unit::Microsecond,
                ticks: self.ticks / 1_000,
            },
        }
    }

    /// Convert to whole nanoseconds. Never loses ticks.
    pub fn to_nanos(&self) -> Self {
        match self.unit {
            Unit::Millisecond => Self {
                unit: Unit::Nanosecond,
                ticks: self.ticks * 1_000_000,
            },
            Unit::Microsecond => Self {
                unit: Unit::Nanosecond,
                ticks: self.ticks * 1_000,
            },
            Unit::Nanosecond => *self,
        }
    }

    /// Return a copy of the datetime with its sub-second fraction replaced
    /// by this value, truncated to microseconds. Every other field of the
    /// datetime passes through unchanged.
    pub fn apply_to_datetime(&self, datetime: OffsetDateTime) -> OffsetDateTime {
        datetime
            .replace_microsecond(self.to_micros().ticks)
            .unwrap()
    }
}

impl Display for SplitSecond {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:0width$}{}",
            self.ticks,
            self.unit.abbr(),
            width = self.unit.decimal_precision() as usize
        )
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct UncheckedSplitSecond {
    unit: Unit,
    ticks: u32,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<UncheckedSplitSecond> for SplitSecond {
    type Error = Error;

    fn try_from(raw: UncheckedSplitSecond) -> Result<Self, Self::Error> {
        Self::new(raw.unit, raw.ticks)
    }
}
