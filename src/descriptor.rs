//! Describes the interval between two dates using its most significant unit only,
//! e.g. `in 1 minute`, `in 7 years` or `6 days ago`.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::template::Template;
use crate::unit::TimeUnit;

pub const DEFAULT_PRIOR_FORMAT: &str = "%@ ago";

pub const DEFAULT_POST_FORMAT: &str = "in %@";

/// Whether the target date precedes or follows the reference date.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Past,
    Future,
}

impl Direction {
    /// Zero is in the past.
    #[must_use]
    pub const fn of(duration_millis: i64) -> Self {
        if duration_millis > 0 {
            Direction::Future
        } else {
            Direction::Past
        }
    }
}

/// The «`{count} {unit}`» part of a description.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct MagnitudePhrase {
    pub count: u64,
    pub unit: TimeUnit,
}

impl MagnitudePhrase {
    #[must_use]
    pub fn from_millis(magnitude_millis: u64) -> Self {
        let unit = TimeUnit::most_significant(magnitude_millis);
        Self {
            count: magnitude_millis / unit.millis(),
            unit,
        }
    }
}

impl Display for MagnitudePhrase {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} {}", self.count, self.unit.noun(self.count))
    }
}

/// Splits the signed duration into its direction and magnitude.
///
/// Sub-millisecond precision is truncated towards zero.
#[must_use]
pub fn measure(duration: Duration) -> (Direction, MagnitudePhrase) {
    let duration_millis = duration.num_milliseconds();
    (
        Direction::of(duration_millis),
        MagnitudePhrase::from_millis(duration_millis.unsigned_abs()),
    )
}

/// Describes the time interval between two dates in a human-readable form.
///
/// The prior format is used when the target date occurs before the reference date,
/// and the post format is used when it occurs after. Each format contains a single
/// `%@` placeholder denoting where to insert the magnitude, for example:
///
/// - prior: `%@ ago`, `occurred %@ ago`, `happened %@ in the past`
/// - post: `in %@`, `occurring in %@`, `happening in %@`
///
/// Months and years have fixed lengths of 30.44 and 365.25 days.
/// The descriptor is immutable and may be shared between threads.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, Eq, PartialEq)]
pub struct RelativeDateDescriptor {
    prior_format: Template,
    post_format: Template,
}

impl Default for RelativeDateDescriptor {
    fn default() -> Self {
        Self {
            prior_format: Template::from_static(DEFAULT_PRIOR_FORMAT),
            post_format: Template::from_static(DEFAULT_POST_FORMAT),
        }
    }
}

impl RelativeDateDescriptor {
    pub fn new(prior_format: impl Into<String>, post_format: impl Into<String>) -> Result<Self> {
        Ok(Self::from_templates(
            Template::new(prior_format)?,
            Template::new(post_format)?,
        ))
    }

    #[must_use]
    pub fn from_templates(prior_format: Template, post_format: Template) -> Self {
        debug!(prior_format = prior_format.as_str(), post_format = post_format.as_str());
        Self {
            prior_format,
            post_format,
        }
    }

    pub fn with_prior_format(self, prior_format: impl Into<String>) -> Result<Self> {
        Ok(Self {
            prior_format: Template::new(prior_format)?,
            ..self
        })
    }

    pub fn with_post_format(self, post_format: impl Into<String>) -> Result<Self> {
        Ok(Self {
            post_format: Template::new(post_format)?,
            ..self
        })
    }

    #[inline]
    #[must_use]
    pub fn prior_format(&self) -> &Template {
        &self.prior_format
    }

    #[inline]
    #[must_use]
    pub fn post_format(&self) -> &Template {
        &self.post_format
    }

    #[must_use]
    pub fn describe<Tz1: TimeZone, Tz2: TimeZone>(
        &self,
        target: &DateTime<Tz1>,
        reference: &DateTime<Tz2>,
    ) -> String {
        self.describe_duration(target.clone().signed_duration_since(reference.clone()))
    }

    /// Describes the target date relative to the current time.
    #[must_use]
    pub fn describe_from_now<Tz: TimeZone>(&self, target: &DateTime<Tz>) -> String {
        self.describe(target, &Utc::now())
    }

    /// Describes the signed `target - reference` duration.
    #[must_use]
    pub fn describe_duration(&self, duration: Duration) -> String {
        let (direction, phrase) = measure(duration);
        trace!(
            duration_millis = duration.num_milliseconds(),
            ?direction,
            count = phrase.count,
            unit = ?phrase.unit,
            "described"
        );
        match direction {
            Direction::Past => self.prior_format.render(phrase),
            Direction::Future => self.post_format.render(phrase),
        }
    }
}
