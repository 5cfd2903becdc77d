mod input;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Datelike, Local, TimeZone};
use clap::{Parser, Subcommand, ValueEnum};
use course_schedule::{ClockTime, Course, CourseOrder, Schedule, Weekday};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "schedule",
    version,
    about = "Check, query and export conflict-free course schedules"
)]
struct Cli {
    /// Log filter (e.g. "debug", "course_schedule=trace"). Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schedule file and summarize it
    Check {
        /// Course file (use - for stdin)
        file: PathBuf,
    },
    /// Print every course, sorted
    Export {
        /// Course file (use - for stdin)
        file: PathBuf,
        /// Sort order: credits or time
        #[arg(long, default_value_t = CourseOrder::Time)]
        order: CourseOrder,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the course in session at a given day and time
    Find {
        /// Course file (use - for stdin)
        file: PathBuf,
        /// Day name or code (M, T, W, R, F)
        #[arg(long)]
        day: Weekday,
        /// Time as "HH:MM AM" or "HH:MM PM"
        #[arg(long)]
        time: ClockTime,
    },
    /// Show the course in session right now (local clock)
    Now {
        /// Course file (use - for stdin)
        file: PathBuf,
    },
    /// Drop the course in session at a given day and time, print the rest
    Remove {
        /// Course file (use - for stdin)
        file: PathBuf,
        /// Day name or code (M, T, W, R, F)
        #[arg(long)]
        day: Weekday,
        /// Time as "HH:MM AM" or "HH:MM PM"
        #[arg(long)]
        time: ClockTime,
    },
    /// Print the total number of credits
    Credits {
        /// Course file (use - for stdin)
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Check { file } => {
            let schedule = input::load_schedule(&file)?;
            println!(
                "{} courses, {} credits",
                schedule.len(),
                schedule.total_credits()
            );
        }
        Commands::Export {
            file,
            order,
            format,
        } => {
            let schedule = input::load_schedule(&file)?;
            export(schedule, order, format)?;
        }
        Commands::Find { file, day, time } => {
            let schedule = input::load_schedule(&file)?;
            println!("{}", find_course(&schedule, day, time)?);
        }
        Commands::Now { file } => {
            let schedule = input::load_schedule(&file)?;
            let (day, time) = class_slot(&Local::now())?;
            println!("{}", find_course(&schedule, day, time)?);
        }
        Commands::Remove { file, day, time } => {
            let mut schedule = input::load_schedule(&file)?;
            if schedule.remove(day, time).is_none() {
                warn!(%day, %time, "no course in session, nothing removed");
            }
            let mut out = std::io::stdout().lock();
            for course in &schedule {
                writeln!(out, "{course}")?;
            }
        }
        Commands::Credits { file } => {
            let schedule = input::load_schedule(&file)?;
            println!("{}", schedule.total_credits());
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn export(mut schedule: Schedule, order: CourseOrder, format: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Text => schedule
            .export(&mut out, |a, b| order.compare(a, b))
            .context("failed to write schedule")?,
        OutputFormat::Json => {
            let mut courses = schedule.all_courses();
            courses.sort_by(|a, b| order.compare(a, b));
            serde_json::to_writer_pretty(&mut out, &courses)
                .context("failed to serialize schedule")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn find_course(schedule: &Schedule, day: Weekday, time: ClockTime) -> Result<&Course> {
    match schedule.get_course(day, time) {
        Some(course) => Ok(course),
        None => bail!("no course in session on {day} at {time}"),
    }
}

/// The school day and wall-clock time of `now`. Weekends have no slot.
fn class_slot<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<(Weekday, ClockTime)> {
    let Ok(day) = Weekday::try_from(now.weekday()) else {
        bail!("no classes on {}", now.date_naive().format("%A"));
    };
    Ok((day, ClockTime::from(now.time())))
}
