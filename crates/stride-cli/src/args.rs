//! Command-line interface definitions using clap
//!
//! The argument structs here carry clap derives only. Each converts into the
//! matching core parameter type, so validation stays in `stride-core` and the
//! MCP server and the command line share one request shape:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use stride_core::params::{EstimatePace, GeneratePlan};

/// Periodized training plans for your next race
///
/// Stride reads your run history, estimates a realistic goal pace and builds
/// a week-by-week plan that moves through base, build, sharpening and taper
/// phases. It can also run as an MCP (Model Context Protocol) server so AI
/// assistants can generate plans on your behalf.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the run history JSON file. Defaults to
    /// $XDG_DATA_HOME/stride/runs.json
    #[arg(long, global = true)]
    pub runs_file: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) used instead of the current date
    #[arg(long, global = true)]
    pub today: Option<Date>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, `analyze` runs.
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the last twelve months of run history
    #[command(alias = "a")]
    Analyze,
    /// Estimate a goal pace for a race distance
    Pace(PaceArgs),
    /// Generate a training plan for a race
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Start the MCP server
    Serve,
}

/// Estimate a goal pace
#[derive(ClapArgs)]
pub struct PaceArgs {
    /// Race distance in meters (e.g. 5000, 10000, 21097.5, 42195)
    pub distance: f64,
}

impl From<PaceArgs> for EstimatePace {
    fn from(val: PaceArgs) -> Self {
        EstimatePace {
            race_distance_meters: val.distance,
        }
    }
}

/// Generate a training plan
#[derive(ClapArgs)]
pub struct PlanArgs {
    #[arg(long, help = "Race distance in meters (e.g. 5000, 10000, 21097.5, 42195)")]
    pub distance: f64,
    #[arg(long, help = "Race day as YYYY-MM-DD")]
    pub date: String,
    #[arg(long, help = "Target finishing time in seconds")]
    pub goal_time: Option<f64>,
    #[arg(
        long,
        help = "Target pace in seconds per kilometer (takes precedence over --goal-time)"
    )]
    pub goal_pace: Option<f64>,
    #[arg(long, help = "Current weekly distance in km (measured from history by default)")]
    pub mileage: Option<f64>,
    #[arg(long, help = "Notes about past injuries")]
    pub injuries: Option<String>,
    #[arg(long, value_enum, help = "Training experience (default: intermediate)")]
    pub experience: Option<ExperienceArg>,
    #[arg(long, help = "Training days per week (1-7, at most 6 are scheduled)")]
    pub days: Option<u8>,
    #[arg(long, value_enum, help = "Day of the long run (default: sunday)")]
    pub long_run_day: Option<LongRunDayArg>,
    #[arg(long, help = "Print the plan as JSON instead of markdown")]
    pub json: bool,
}

impl From<PlanArgs> for GeneratePlan {
    fn from(val: PlanArgs) -> Self {
        GeneratePlan {
            race_distance_meters: val.distance,
            race_date: val.date,
            goal_time_seconds: val.goal_time,
            goal_pace_seconds_per_km: val.goal_pace,
            current_weekly_mileage_km: val.mileage,
            injury_history: val.injuries,
            training_experience: val.experience.map(|e| e.to_string()),
            available_days_per_week: val.days,
            preferred_long_run_day: val.long_run_day.map(|d| d.to_string()),
        }
    }
}

/// Command-line representation of the training experience levels
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExperienceArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for ExperienceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceArg::Beginner => write!(f, "beginner"),
            ExperienceArg::Intermediate => write!(f, "intermediate"),
            ExperienceArg::Advanced => write!(f, "advanced"),
        }
    }
}

/// Command-line representation of the long run days
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LongRunDayArg {
    Saturday,
    Sunday,
}

impl fmt::Display for LongRunDayArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongRunDayArg::Saturday => write!(f, "saturday"),
            LongRunDayArg::Sunday => write!(f, "sunday"),
        }
    }
}
