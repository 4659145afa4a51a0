use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::time::*;

/// Unit of a relative date description, ordered from the finest to the coarsest.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Ord, Eq, PartialEq, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Fixed length of the unit.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => MILLIS_PER_SECOND,
            TimeUnit::Minutes => MILLIS_PER_MINUTE,
            TimeUnit::Hours => MILLIS_PER_HOUR,
            TimeUnit::Days => MILLIS_PER_DAY,
            TimeUnit::Months => MILLIS_PER_MONTH,
            TimeUnit::Years => MILLIS_PER_YEAR,
        }
    }

    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "millisecond",
            TimeUnit::Seconds => "second",
            TimeUnit::Minutes => "minute",
            TimeUnit::Hours => "hour",
            TimeUnit::Days => "day",
            TimeUnit::Months => "month",
            TimeUnit::Years => "year",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    /// Noun agreeing with the count: singular for exactly one, plural otherwise.
    #[must_use]
    pub const fn noun(self, count: u64) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// The coarsest unit which fits into the magnitude, falling back to milliseconds.
    #[must_use]
    pub fn most_significant(magnitude_millis: u64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|unit| unit.millis() <= magnitude_millis)
            .unwrap_or(TimeUnit::Milliseconds)
    }
}

impl Display for TimeUnit {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.plural())
    }
}
