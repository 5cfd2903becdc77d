//! Reading schedules from course-line files.
//!
//! One course per line in the `NAME,credits,DAYS,HH:MM AM,duration` format.
//! Blank lines and lines starting with `#` are skipped.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use course_schedule::{Course, Schedule};
use tracing::debug;

/// Read the whole input; `-` means stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Parse every course line and add it to a fresh schedule, in file order.
pub fn parse_schedule(text: &str) -> Result<Schedule> {
    let mut schedule = Schedule::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let course: Course = line
            .parse()
            .with_context(|| format!("line {line_no}: invalid course"))?;
        schedule
            .add(course)
            .with_context(|| format!("line {line_no}: cannot add course"))?;
    }
    debug!(
        courses = schedule.len(),
        credits = schedule.total_credits(),
        "loaded schedule"
    );
    Ok(schedule)
}

pub fn load_schedule(path: &Path) -> Result<Schedule> {
    let text = read_source(path)?;
    parse_schedule(&text)
}
