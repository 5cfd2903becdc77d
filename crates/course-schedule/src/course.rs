//! A course's meeting pattern and the overlap queries built on it.
//!
//! A course meets on a set of weekdays, each time from its start time for a
//! fixed number of minutes. Meetings are half-open intervals `[start, end)`:
//! a course ending at 10:00 AM does not conflict with one starting at 10:00 AM.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::clock::ClockTime;
use crate::error::{Result, ScheduleError};
use crate::weekday::{Weekday, Weekdays};

/// An immutable course offering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    name: String,
    credits: u8,
    days: Weekdays,
    start_time: ClockTime,
    duration_minutes: u32,
}

impl Course {
    /// Build a course. The name is stored uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidCourse`] if the name is empty or has no
    /// space in it, `credits` is outside 1-5, `days` is empty, or
    /// `duration_minutes` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_schedule::{ClockTime, Course};
    ///
    /// let course = Course::new(
    ///     "EGR 101 Intro",
    ///     3,
    ///     "MWF".parse().unwrap(),
    ///     ClockTime::new(9, 0, false).unwrap(),
    ///     50,
    /// )
    /// .unwrap();
    /// assert_eq!(course.end_time().to_string(), "09:50 AM");
    /// assert_eq!(course.to_string(), "EGR 101 INTRO,3,MWF,09:00 AM,50");
    /// ```
    pub fn new(
        name: impl AsRef<str>,
        credits: u8,
        days: Weekdays,
        start_time: ClockTime,
        duration_minutes: u32,
    ) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(ScheduleError::InvalidCourse(
                "name must not be empty".to_string(),
            ));
        }
        if !name.contains(' ') {
            return Err(ScheduleError::InvalidCourse(format!(
                "name '{name}' must contain a space"
            )));
        }
        if !(1..=5).contains(&credits) {
            return Err(ScheduleError::InvalidCourse(format!(
                "credits should be between 1-5 inclusive, got {credits}"
            )));
        }
        if days.is_empty() {
            return Err(ScheduleError::InvalidCourse(
                "course must be offered on at least one day".to_string(),
            ));
        }
        if duration_minutes == 0 {
            return Err(ScheduleError::InvalidCourse(
                "duration must be greater than 0 minutes".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_uppercase(),
            credits,
            days,
            start_time,
            duration_minutes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn days(&self) -> Weekdays {
        self.days
    }

    /// First minute of each meeting (inclusive).
    pub fn start_time(&self) -> ClockTime {
        self.start_time
    }

    pub fn duration(&self) -> u32 {
        self.duration_minutes
    }

    /// First minute after each meeting (exclusive).
    pub fn end_time(&self) -> ClockTime {
        self.start_time.advance(i64::from(self.duration_minutes))
    }

    /// True when the two courses meet on a shared day at overlapping times.
    pub fn conflicts_with(&self, other: &Course) -> bool {
        self.has_weekday_overlap(other) && self.has_time_overlap(other)
    }

    /// True when the course is in session at `time` on `day`.
    pub fn contains(&self, day: Weekday, time: ClockTime) -> bool {
        self.days.contains(day) && self.start_time <= time && time < self.end_time()
    }

    fn has_weekday_overlap(&self, other: &Course) -> bool {
        self.days.intersects(other.days)
    }

    fn has_time_overlap(&self, other: &Course) -> bool {
        self.end_time() > other.start_time && self.start_time < other.end_time()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.name, self.credits, self.days, self.start_time, self.duration_minutes
        )
    }
}

impl FromStr for Course {
    type Err = ScheduleError;

    /// Parse `NAME,credits,DAYCODES,HH:MM AM,duration`. The name may itself
    /// contain commas; the last four fields are split off from the right.
    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.rsplitn(5, ',').map(str::trim);
        let (Some(duration), Some(start), Some(days), Some(credits), Some(name)) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err(ScheduleError::InvalidCourse(format!(
                "'{s}': expected NAME,credits,DAYS,START,duration"
            )));
        };

        let credits: u8 = credits.parse().map_err(|_| {
            ScheduleError::InvalidCourse(format!("'{s}': invalid credits '{credits}'"))
        })?;
        let duration: u32 = duration.parse().map_err(|_| {
            ScheduleError::InvalidCourse(format!("'{s}': invalid duration '{duration}'"))
        })?;

        Course::new(name, credits, days.parse()?, start.parse()?, duration)
    }
}

impl Serialize for Course {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Course", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("credits", &self.credits)?;
        state.serialize_field("days", &self.days)?;
        state.serialize_field("start_time", &self.start_time)?;
        state.serialize_field("end_time", &self.end_time())?;
        state.serialize_field("duration_minutes", &self.duration_minutes)?;
        state.end()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
