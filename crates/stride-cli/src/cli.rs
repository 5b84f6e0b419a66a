//! Command execution against the planner
//!
//! Each handler calls one planner operation and renders its markdown
//! `Display` output, so the terminal shows the same text the MCP tools
//! return.

use anyhow::{Context, Result};
use log::debug;
use stride_core::{
    params::{EstimatePace, GeneratePlan},
    Planner, TrainingPlan,
};

use crate::{
    args::{PaceArgs, PlanArgs},
    renderer::TerminalRenderer,
};

/// Executes parsed commands
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Summarize the run history
    pub async fn analyze(&self) -> Result<()> {
        let analysis = self
            .planner
            .analyze()
            .await
            .context("Failed to analyze run history")?;
        self.renderer.render(&analysis.to_string())
    }

    /// Estimate a goal pace for a race distance
    pub async fn estimate_pace(&self, args: PaceArgs) -> Result<()> {
        let params = EstimatePace::from(args);
        debug!("estimate_pace: {params:?}");

        let estimate = self
            .planner
            .estimate_goal_pace(&params)
            .await
            .context("Failed to estimate goal pace")?;
        self.renderer.render(&estimate.to_string())
    }

    /// Generate a training plan, as markdown or JSON
    pub async fn generate_plan(&self, args: PlanArgs) -> Result<()> {
        let json = args.json;
        let params = GeneratePlan::from(args);
        debug!("generate_plan: {params:?}");

        let plan = self
            .planner
            .generate_plan(&params)
            .await
            .context("Failed to generate plan")?;

        if json {
            let output =
                serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
            println!("{output}");
            Ok(())
        } else {
            self.renderer.render(&TrainingPlan(&plan).to_string())
        }
    }
}
