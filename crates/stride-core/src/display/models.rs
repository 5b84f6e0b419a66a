//! Display implementations for domain models.
//!
//! Kept apart from the model definitions. All output is markdown, rendered
//! by the CLI's terminal renderer and returned as text by the MCP server.

use std::fmt;

use super::{
    datetime::{LongDate, ShortDate},
    pace::{format_duration, format_pace},
};
use crate::models::{
    Confidence, Experience, FitnessTrend, GoalPaceEstimate, LongRunDay, Phase, RunningAnalysis,
    TrainingWeek, TrainingWorkout, WorkoutType,
};

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LongRunDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FitnessTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RunningAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Running Analysis")?;
        writeln!(f)?;

        if self.total_runs == 0 {
            return writeln!(f, "{}", self.reasoning);
        }

        writeln!(f, "- Runs analyzed: {}", self.total_runs)?;
        writeln!(f, "- Average pace: {}", format_pace(self.average_pace))?;
        writeln!(f, "- Best pace: {}", format_pace(self.best_pace))?;
        writeln!(f, "- Recent average pace: {}", format_pace(self.recent_average_pace))?;
        writeln!(f, "- Weekly volume: {:.1} km", self.weekly_volume_km)?;
        writeln!(f, "- Longest run: {:.1} km", self.longest_run_km)?;
        writeln!(f, "- Suggested goal pace: {}", format_pace(self.suggested_goal_pace))?;
        writeln!(f, "- Fitness trend: {}", self.fitness_trend)?;
        writeln!(f, "- Confidence: {}", self.confidence)?;
        writeln!(f)?;
        writeln!(f, "{}", self.reasoning)?;

        if !self.recent_best_efforts.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Recent Best Efforts")?;
            writeln!(f)?;
            writeln!(f, "| Distance | Pace | Date |")?;
            writeln!(f, "|---|---|---|")?;
            for effort in &self.recent_best_efforts {
                writeln!(
                    f,
                    "| {} km | {} | {} |",
                    effort.distance_km,
                    format_pace(effort.pace),
                    effort.date
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for GoalPaceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Goal Pace for {} km", self.race_distance_km)?;
        writeln!(f)?;
        writeln!(f, "- Goal pace: {}", format_pace(self.goal_pace_seconds_per_km))?;
        writeln!(
            f,
            "- Predicted finish: {}",
            format_duration(self.predicted_time_seconds)
        )?;
        writeln!(
            f,
            "- Confidence: {} ({} runs)",
            self.confidence, self.based_on_runs
        )
    }
}

impl fmt::Display for TrainingWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({}): {}",
            self.day,
            ShortDate(self.date),
            self.workout_type.as_str().to_uppercase()
        )?;
        writeln!(f)?;

        if let Some(distance) = self.distance_km {
            writeln!(f, "- Distance: {distance} km")?;
        }
        if let Some(duration) = self.duration_min {
            writeln!(f, "- Duration: {duration} min")?;
        }
        if let Some(pace) = &self.pace {
            writeln!(f, "- Pace: {pace}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "*{notes}*")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TrainingWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Week {} ({})", self.week_number, self.phase)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} - {} | Total distance: {} km",
            ShortDate(self.start_date),
            LongDate(self.end_date),
            self.total_distance_km
        )?;
        writeln!(f)?;

        if self.workouts.is_empty() {
            return writeln!(f, "Rest week.\n");
        }
        for workout in &self.workouts {
            write!(f, "{workout}")?;
        }
        Ok(())
    }
}
