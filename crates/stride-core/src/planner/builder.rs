//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::civil::Date;

use super::{strategy::PlanStrategy, Planner};
use crate::error::{PlannerError, Result};

/// Builder for creating and configuring Planner instances.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    runs_path: Option<PathBuf>,
    today: Option<Date>,
    strategy: Option<Arc<dyn PlanStrategy>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom run history file.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/runs.json` or `~/.local/share/stride/runs.json`
    pub fn with_runs_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.runs_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Pins the reference date. Defaults to the current date.
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        if today.is_some() {
            self.today = today;
        }
        self
    }

    /// Registers an alternate plan strategy. The rule-based generator stays
    /// the fallback.
    pub fn with_strategy(mut self, strategy: Arc<dyn PlanStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default run history
    /// location can be resolved
    pub fn build(self) -> Result<Planner> {
        let runs_path = match self.runs_path {
            Some(path) => path,
            None => Self::default_runs_path()?,
        };

        Ok(Planner::new(runs_path, self.today, self.strategy))
    }

    /// Returns the default run history path following XDG Base Directory
    /// specification.
    fn default_runs_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file("runs.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
