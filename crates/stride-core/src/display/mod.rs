//! Display formatting functions and wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! whole plans go through a newtype wrapper. Everything is
//! markdown so the same text renders in the terminal and reads well as an
//! MCP tool result.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (Week, Workout) │───▶│ & Wrapper Types │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Whole-plan wrapper types (TrainingPlan)
//! - [`datetime`]: Calendar date formatting utilities
//! - [`pace`]: Pace and duration formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod pace;

pub use collections::TrainingPlan;
pub use datetime::{weekday_name, LongDate, ShortDate};
pub use pace::{format_duration, format_pace};
