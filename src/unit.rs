use core::fmt::Display;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{MICROS_PER_SEC, MILLIS_PER_SEC, NANOS_PER_SEC};

/// The resolution of a sub-second tick count.
///
/// This is a closed set: every supported resolution divides one second by a
/// power of one thousand, so conversion between any two units is a single
/// integer multiplication or truncating division. Matches over `Unit` are
/// exhaustive on purpose; adding a variant must force every conversion site
/// to be revisited.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Unit {
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl Unit {
    /// The number of ticks of this unit in one whole second.
    pub const fn per_second(&self) -> u32 {
        match self {
            Self::Millisecond => MILLIS_PER_SEC,
            Self::Microsecond => MICROS_PER_SEC,
            Self::Nanosecond => NANOS_PER_SEC,
        }
    }

    /// The largest tick count that still falls short of a whole second.
    pub const fn max_in_second(&self) -> u32 {
        self.per_second() - 1
    }

    /// The number of decimal digits after the point when this unit is
    /// written as a fraction of a second.
    pub const fn decimal_precision(&self) -> u32 {
        match self {
            Self::Millisecond => 3,
            Self::Microsecond => 6,
            Self::Nanosecond => 9,
        }
    }

    /// The conventional short label for this unit.
    pub const fn abbr(&self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Microsecond => "µs",
            Self::Nanosecond => "ns",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.abbr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Unit; 3] = [Unit::Millisecond, Unit::Microsecond, Unit::Nanosecond];

    #[test]
    fn per_second() {
        assert_eq!(Unit::Millisecond.per_second(), 1_000);
        assert_eq!(Unit::Microsecond.per_second(), 1_000_000);
        assert_eq!(Unit::Nanosecond.per_second(), 1_000_000_000);
    }

    #[test]
    fn max_in_second() {
        assert_eq!(Unit::Millisecond.max_in_second(), 999);
        assert_eq!(Unit::Microsecond.max_in_second(), 999_999);
        assert_eq!(Unit::Nanosecond.max_in_second(), 999_999_999);

        for unit in ALL {
            assert_eq!(unit.max_in_second(), unit.per_second() - 1);
        }
    }

    #[test]
    fn decimal_precision() {
        for unit in ALL {
            assert_eq!(
                10_u32.pow(unit.decimal_precision()),
                unit.per_second(),
                "precision disagrees with ticks per second for {unit:?}"
            );
        }
    }

    #[test]
    fn abbr() {
        assert_eq!(Unit::Millisecond.abbr(), "ms");
        assert_eq!(Unit::Microsecond.abbr(), "µs");
        assert_eq!(Unit::Nanosecond.abbr(), "ns");
    }

    #[test]
    fn display() {
        assert_eq!(Unit::Nanosecond.to_string(), "ns");
    }
}
