//! # course-schedule
//!
//! Deterministic course-schedule computation.
//!
//! Models class meeting times on a 12-hour clock, detects day-and-time
//! conflicts between courses, and maintains a schedule that never holds two
//! conflicting courses. Everything here is a pure value computation: no system
//! clock access and no file I/O beyond writing export lines to a caller's sink.
//!
//! ## Modules
//!
//! - [`weekday`] — Monday–Friday enumeration and the `Weekdays` day set
//! - [`clock`] — 12-hour wall-clock times: parse, format, shift, order
//! - [`course`] — A course's meeting pattern, end time, overlap queries
//! - [`compare`] — Orderings for sorted export
//! - [`schedule`] — Conflict-free course collection
//! - [`error`] — Error types

pub mod clock;
pub mod compare;
pub mod course;
pub mod error;
pub mod schedule;
pub mod weekday;

pub use clock::ClockTime;
pub use compare::{by_credits_then_name, by_start_then_end_then_name, CourseOrder};
pub use course::Course;
pub use error::{ConflictError, ScheduleError};
pub use schedule::Schedule;
pub use weekday::{Weekday, Weekdays};
