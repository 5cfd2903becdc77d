//! Orderings over courses, used for sorted export.
//!
//! Both are total but not consistent with equality: two courses differing only
//! in days or duration can tie. Sort with a stable sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::course::Course;
use crate::error::ScheduleError;

/// Fewest credits first, then by name.
pub fn by_credits_then_name(a: &Course, b: &Course) -> Ordering {
    a.credits()
        .cmp(&b.credits())
        .then_with(|| a.name().cmp(b.name()))
}

/// Earliest start first, then earliest end, then by name.
pub fn by_start_then_end_then_name(a: &Course, b: &Course) -> Ordering {
    a.start_time()
        .cmp(&b.start_time())
        .then_with(|| a.end_time().cmp(&b.end_time()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Names one of the export orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseOrder {
    /// [`by_credits_then_name`]
    Credits,
    /// [`by_start_then_end_then_name`]
    #[default]
    Time,
}

impl CourseOrder {
    pub fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            CourseOrder::Credits => by_credits_then_name(a, b),
            CourseOrder::Time => by_start_then_end_then_name(a, b),
        }
    }
}

impl fmt::Display for CourseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseOrder::Credits => f.write_str("credits"),
            CourseOrder::Time => f.write_str("time"),
        }
    }
}

impl FromStr for CourseOrder {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "credits" => Ok(CourseOrder::Credits),
            "time" => Ok(CourseOrder::Time),
            _ => Err(ScheduleError::InvalidOrder(format!(
                "unknown order '{s}', expected 'credits' or 'time'"
            ))),
        }
    }
}
