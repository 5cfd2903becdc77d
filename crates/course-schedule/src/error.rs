//! Error types for course-schedule operations.

use thiserror::Error;

use crate::course::Course;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// An attempt to add a course that meets on a shared day at an overlapping
/// time with a course already in the schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{existing} and {candidate} have day and time conflict")]
pub struct ConflictError {
    /// The course already held by the schedule.
    pub existing: Course,
    /// The course that was rejected.
    pub candidate: Course,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
