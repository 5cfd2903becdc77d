//! 12-hour wall-clock times.
//!
//! A [`ClockTime`] is an hour (1-12), a minute (0-59) and an AM/PM flag. Its
//! text form is always exactly eight characters, `HH:MM AM` or `HH:MM PM`, and
//! parsing is strict about that layout. Times order by minutes since midnight,
//! so `12:00 AM` is the earliest instant of the day and `11:59 PM` the latest.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{Result, ScheduleError};

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// A time of day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    is_pm: bool,
}

impl ClockTime {
    /// Build a time from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTime`] if `hour` is outside 1-12 or
    /// `minute` is outside 0-59.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_schedule::ClockTime;
    ///
    /// let t = ClockTime::new(9, 5, false).unwrap();
    /// assert_eq!(t.to_string(), "09:05 AM");
    /// assert!(ClockTime::new(13, 0, false).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8, is_pm: bool) -> Result<Self> {
        if !(1..=12).contains(&hour) {
            return Err(ScheduleError::InvalidTime(format!(
                "hour should be between 1-12 inclusive, got {hour}"
            )));
        }
        if minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "minute should be between 0-59 inclusive, got {minute}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            is_pm,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn is_pm(self) -> bool {
        self.is_pm
    }

    /// Minutes elapsed since midnight, 0 for `12:00 AM` up to 1439 for `11:59 PM`.
    pub fn minutes_since_midnight(self) -> u16 {
        let mut hour = u16::from(self.hour % 12);
        if self.is_pm {
            hour += 12;
        }
        hour * 60 + u16::from(self.minute)
    }

    /// The time `minutes_to_add` minutes later, wrapping past midnight.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidShift`] if `minutes_to_add` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_schedule::ClockTime;
    ///
    /// let t: ClockTime = "12:30 PM".parse().unwrap();
    /// assert_eq!(t.shift(45).unwrap().to_string(), "01:15 PM");
    /// assert_eq!(t.shift(12 * 60).unwrap().to_string(), "12:30 AM");
    /// ```
    pub fn shift(self, minutes_to_add: i64) -> Result<Self> {
        if minutes_to_add < 0 {
            return Err(ScheduleError::InvalidShift(format!(
                "minutes cannot be negative, got {minutes_to_add}"
            )));
        }
        Ok(self.advance(minutes_to_add))
    }

    /// Shift by a non-negative amount. Callers guarantee `minutes >= 0`.
    pub(crate) fn advance(self, minutes: i64) -> Self {
        // Whole days leave the clock unchanged.
        let total = i64::from(self.minute) + minutes % MINUTES_PER_DAY;
        let minute = (total % MINUTES_PER_HOUR) as u8;
        let hours_to_add = total / MINUTES_PER_HOUR % HOURS_PER_DAY;

        if hours_to_add == 0 {
            return Self { minute, ..self };
        }

        // Work with 12 as 0, then count how many times the clock passes noon
        // or midnight. An odd count flips AM/PM.
        let hour = i64::from(self.hour % 12) + hours_to_add;
        let flips = hour / 12;
        let hour = match hour % 12 {
            0 => 12,
            h => h as u8,
        };
        let is_pm = if flips % 2 == 1 {
            !self.is_pm
        } else {
            self.is_pm
        };

        Self {
            hour,
            minute,
            is_pm,
        }
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes_since_midnight()
            .cmp(&other.minutes_since_midnight())
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.is_pm { "PM" } else { "AM" };
        write!(f, "{:02}:{:02} {meridiem}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    /// Parse the strict `HH:MM AM` / `HH:MM PM` layout.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 8 || !s.is_ascii() {
            return Err(ScheduleError::InvalidTime(format!(
                "'{s}': the length of the given string must be 8"
            )));
        }
        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(ScheduleError::InvalidTime(format!(
                "'{s}': expected a colon at index 2"
            )));
        }
        if bytes[5] != b' ' {
            return Err(ScheduleError::InvalidTime(format!(
                "'{s}': expected a space at index 5"
            )));
        }

        let is_pm = match &s[6..] {
            "PM" => true,
            "AM" => false,
            _ => {
                return Err(ScheduleError::InvalidTime(format!(
                    "'{s}': expected AM or PM as the last two characters"
                )));
            }
        };

        let hour: u8 = s[0..2]
            .parse()
            .map_err(|_| ScheduleError::InvalidTime(format!("'{s}': invalid hour")))?;
        let minute: u8 = s[3..5]
            .parse()
            .map_err(|_| ScheduleError::InvalidTime(format!("'{s}': invalid minute")))?;

        ClockTime::new(hour, minute, is_pm)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(t: ClockTime) -> Self {
        let minutes = u32::from(t.minutes_since_midnight());
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or_default()
    }
}

impl From<NaiveTime> for ClockTime {
    /// Seconds and below are dropped.
    fn from(t: NaiveTime) -> Self {
        let hour24 = t.hour();
        let hour = match hour24 % 12 {
            0 => 12,
            h => h as u8,
        };
        Self {
            hour,
            minute: t.minute() as u8,
            is_pm: hour24 >= 12,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
