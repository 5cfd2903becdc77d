//! A student's conflict-free course schedule.
//!
//! Courses are kept in insertion order. Every insertion is checked against
//! every course already held; the first conflicting course in that order is
//! the one reported, and a rejected insertion leaves the schedule untouched.

use std::cmp::Ordering;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::clock::ClockTime;
use crate::course::Course;
use crate::error::ConflictError;
use crate::weekday::Weekday;

/// An ordered collection of courses, no two of which conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    courses: Vec<Course>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule by adding each course in turn.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConflictError`] hit while adding.
    pub fn try_from_courses<I>(courses: I) -> Result<Self, ConflictError>
    where
        I: IntoIterator<Item = Course>,
    {
        let mut schedule = Schedule::new();
        for course in courses {
            schedule.add(course)?;
        }
        Ok(schedule)
    }

    /// Append `course` unless it conflicts with a course already held.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError`] naming the first held course (in insertion
    /// order) that conflicts with `course`. The schedule is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_schedule::Schedule;
    ///
    /// let mut schedule = Schedule::new();
    /// schedule.add("CS 1,3,T,10:00 AM,60".parse().unwrap()).unwrap();
    /// let err = schedule
    ///     .add("CS 2,3,T,10:30 AM,60".parse().unwrap())
    ///     .unwrap_err();
    /// assert_eq!(err.existing.name(), "CS 1");
    /// assert_eq!(schedule.len(), 1);
    /// ```
    pub fn add(&mut self, course: Course) -> Result<(), ConflictError> {
        if let Some(existing) = self.courses.iter().find(|c| c.conflicts_with(&course)) {
            debug!(existing = %existing, candidate = %course, "rejected conflicting course");
            return Err(ConflictError {
                existing: existing.clone(),
                candidate: course,
            });
        }
        debug!(course = %course, "added course");
        self.courses.push(course);
        Ok(())
    }

    /// A copy of every course, in the schedule's current order.
    pub fn all_courses(&self) -> Vec<Course> {
        self.courses.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The course in session at `time` on `day`, if any.
    pub fn get_course(&self, day: Weekday, time: ClockTime) -> Option<&Course> {
        self.courses.iter().find(|c| c.contains(day, time))
    }

    /// Remove and return the course in session at `time` on `day`.
    /// Does nothing when no course is in session then.
    pub fn remove(&mut self, day: Weekday, time: ClockTime) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.contains(day, time))?;
        let removed = self.courses.remove(index);
        debug!(course = %removed, %day, %time, "removed course");
        Some(removed)
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| u32::from(c.credits())).sum()
    }

    /// Sort the schedule in place with `compare` (stable), then write one
    /// line per course to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`. The schedule stays sorted even
    /// if writing fails part-way.
    pub fn export<W, F>(&mut self, out: &mut W, compare: F) -> io::Result<()>
    where
        W: Write + ?Sized,
        F: FnMut(&Course, &Course) -> Ordering,
    {
        self.courses.sort_by(compare);
        trace!(count = self.courses.len(), "exporting courses");
        for course in &self.courses {
            writeln!(out, "{course}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Course>> for Schedule {
    type Error = ConflictError;

    fn try_from(courses: Vec<Course>) -> Result<Self, Self::Error> {
        Schedule::try_from_courses(courses)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{by_credits_then_name, by_start_then_end_then_name};

    fn course(line: &str) -> Course {
        line.parse().unwrap()
    }

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn names(schedule: &Schedule) -> Vec<String> {
        schedule.iter().map(|c| c.name().to_string()).collect()
    }

    // ── add tests ───────────────────────────────────────────────────────

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 2,3,M,11:00 AM,50")).unwrap();
        schedule.add(course("CS 1,3,M,09:00 AM,50")).unwrap();
        assert_eq!(names(&schedule), ["CS 2", "CS 1"]);
    }

    #[test]
    fn test_add_conflict_reports_both_courses() {
        let mut schedule = Schedule::new();
        let first = course("CS 1,3,T,10:00 AM,60");
        let second = course("CS 2,3,T,10:30 AM,60");
        schedule.add(first.clone()).unwrap();

        let err = schedule.add(second.clone()).unwrap_err();
        assert_eq!(err.existing, first);
        assert_eq!(err.candidate, second);
        assert_eq!(
            err.to_string(),
            "CS 1,3,T,10:00 AM,60 and CS 2,3,T,10:30 AM,60 have day and time conflict"
        );
    }

    #[test]
    fn test_add_conflict_leaves_schedule_unchanged() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 1,3,MW,10:00 AM,60")).unwrap();
        schedule.add(course("CS 2,3,TR,10:00 AM,60")).unwrap();
        let before = schedule.all_courses();

        assert!(schedule.add(course("CS 3,3,RF,10:59 AM,10")).is_err());
        assert_eq!(schedule.all_courses(), before);
    }

    #[test]
    fn test_add_reports_first_conflict_in_insertion_order() {
        let mut schedule = Schedule::new();
        schedule.add(course("LATE 1,3,M,11:00 AM,60")).unwrap();
        schedule.add(course("EARLY 1,3,M,09:00 AM,60")).unwrap();

        let err = schedule.add(course("LONG 1,3,M,09:30 AM,120")).unwrap_err();
        assert_eq!(err.existing.name(), "LATE 1");
    }

    #[test]
    fn test_disjoint_days_both_added() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 1,3,M,09:00 AM,60")).unwrap();
        schedule.add(course("CS 2,4,T,09:00 AM,60")).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.total_credits(), 7);
    }

    #[test]
    fn test_conflict_converts_into_schedule_error() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 1,3,M,09:00 AM,60")).unwrap();
        let err: crate::ScheduleError = schedule
            .add(course("CS 2,3,M,09:00 AM,60"))
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("have day and time conflict"));
    }

    // ── lookup and removal tests ────────────────────────────────────────

    #[test]
    fn test_get_course() {
        let mut schedule = Schedule::new();
        schedule.add(course("EGR 101 Intro,3,MWF,09:00 AM,50")).unwrap();

        let found = schedule.get_course(Weekday::Wednesday, t("09:30 AM"));
        assert_eq!(found.map(Course::name), Some("EGR 101 INTRO"));
        assert!(schedule
            .get_course(Weekday::Wednesday, t("10:00 AM"))
            .is_none());
        assert!(schedule.get_course(Weekday::Tuesday, t("09:30 AM")).is_none());
    }

    #[test]
    fn test_remove() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 1,3,MWF,09:00 AM,50")).unwrap();
        schedule.add(course("CS 2,3,MWF,10:00 AM,50")).unwrap();

        let removed = schedule.remove(Weekday::Friday, t("10:15 AM")).unwrap();
        assert_eq!(removed.name(), "CS 2");
        assert_eq!(names(&schedule), ["CS 1"]);
    }

    #[test]
    fn test_remove_no_match_is_noop() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 1,3,MWF,09:00 AM,50")).unwrap();
        assert!(schedule.remove(Weekday::Tuesday, t("09:15 AM")).is_none());
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_total_credits_empty() {
        assert_eq!(Schedule::new().total_credits(), 0);
    }

    // ── export tests ────────────────────────────────────────────────────

    #[test]
    fn test_export_by_time() {
        let mut schedule = Schedule::new();
        schedule.add(course("CS 3,3,M,01:00 PM,50")).unwrap();
        schedule.add(course("CS 1,3,M,08:00 AM,50")).unwrap();
        schedule.add(course("CS 2,3,M,10:00 AM,50")).unwrap();

        let mut out = Vec::new();
        schedule
            .export(&mut out, by_start_then_end_then_name)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CS 1,3,M,08:00 AM,50\nCS 2,3,M,10:00 AM,50\nCS 3,3,M,01:00 PM,50\n"
        );
        assert_eq!(names(&schedule), ["CS 1", "CS 2", "CS 3"]);
    }

    #[test]
    fn test_export_by_credits() {
        let mut schedule = Schedule::new();
        schedule.add(course("B 1,4,M,08:00 AM,50")).unwrap();
        schedule.add(course("A 1,4,T,08:00 AM,50")).unwrap();
        schedule.add(course("C 1,1,W,08:00 AM,50")).unwrap();

        let mut out = Vec::new();
        schedule.export(&mut out, by_credits_then_name).unwrap();
        let lines: Vec<_> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(
            lines,
            [
                "C 1,1,W,08:00 AM,50",
                "A 1,4,T,08:00 AM,50",
                "B 1,4,M,08:00 AM,50"
            ]
        );
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let mut out = Vec::new();
        Schedule::new()
            .export(&mut out, by_credits_then_name)
            .unwrap();
        assert!(out.is_empty());
    }

    // ── clone tests ─────────────────────────────────────────────────────

    #[test]
    fn test_clone_is_independent() {
        let mut original = Schedule::new();
        original.add(course("CS 1,3,M,09:00 AM,50")).unwrap();

        let mut copy = original.clone();
        copy.add(course("CS 2,3,T,09:00 AM,50")).unwrap();
        assert_eq!(original.len(), 1);

        original.remove(Weekday::Monday, t("09:00 AM")).unwrap();
        assert_eq!(copy.len(), 2);
        assert!(original.is_empty());
    }

    #[test]
    fn test_try_from_vec() {
        let ok = Schedule::try_from(vec![
            course("CS 1,3,M,09:00 AM,50"),
            course("CS 2,3,M,10:00 AM,50"),
        ])
        .unwrap();
        assert_eq!(ok.len(), 2);

        let err = Schedule::try_from(vec![
            course("CS 1,3,M,09:00 AM,50"),
            course("CS 2,3,M,09:49 AM,50"),
        ])
        .unwrap_err();
        assert_eq!(err.candidate.name(), "CS 2");
    }
}
