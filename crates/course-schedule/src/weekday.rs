//! School weekdays and sets of them.
//!
//! Only Monday through Friday exist here. A [`Weekdays`] set is a bitmask over
//! those five days, so intersection is a single `&`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ScheduleError;

/// A day on which a course can meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All five days in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Single-letter code. Thursday is `R` so it does not collide with Tuesday.
    pub fn short_name(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
        }
    }

    /// Full capitalised name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    fn from_code(code: char) -> Option<Weekday> {
        match code.to_ascii_uppercase() {
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'R' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Accepts a full day name or its single-letter code, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Weekday::from_code(code)
                .ok_or_else(|| ScheduleError::InvalidWeekday(format!("'{s}'")));
        }

        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScheduleError::InvalidWeekday(format!("'{s}'")))
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
        }
    }
}

impl TryFrom<chrono::Weekday> for Weekday {
    type Error = ScheduleError;

    fn try_from(day: chrono::Weekday) -> Result<Self, Self::Error> {
        match day {
            chrono::Weekday::Mon => Ok(Weekday::Monday),
            chrono::Weekday::Tue => Ok(Weekday::Tuesday),
            chrono::Weekday::Wed => Ok(Weekday::Wednesday),
            chrono::Weekday::Thu => Ok(Weekday::Thursday),
            chrono::Weekday::Fri => Ok(Weekday::Friday),
            weekend => Err(ScheduleError::InvalidWeekday(format!(
                "{weekend} is not a school day"
            ))),
        }
    }
}

// ── Weekdays ────────────────────────────────────────────────────────────────

/// A set of weekdays, iterated in calendar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Weekdays(u8);

impl Weekdays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day.bit();
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when the two sets share at least one day.
    pub fn intersects(self, other: Weekdays) -> bool {
        self.0 & other.0 != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |day| self.contains(*day))
    }
}

impl From<Weekday> for Weekdays {
    fn from(day: Weekday) -> Self {
        Weekdays(day.bit())
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = Weekdays::new();
        for day in iter {
            days.insert(day);
        }
        days
    }
}

impl fmt::Display for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.short_name())?;
        }
        Ok(())
    }
}

impl FromStr for Weekdays {
    type Err = ScheduleError;

    /// Parse a run of day codes such as `"MWF"` or `"tr"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ScheduleError::InvalidWeekday(
                "empty day codes".to_string(),
            ));
        }
        s.chars()
            .map(|code| {
                Weekday::from_code(code).ok_or_else(|| {
                    ScheduleError::InvalidWeekday(format!("unknown day code '{code}' in '{s}'"))
                })
            })
            .collect()
    }
}

impl Serialize for Weekdays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
