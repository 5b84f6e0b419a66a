//! Plan generation operations for the Planner.

use super::{
    assembler::{plan_structure, resolve_goal_pace},
    strategy::{generate_with_fallback, RuleBasedStrategy},
    Planner,
};
use crate::{
    analyzer::analyze_running_data,
    error::Result,
    models::{GeneratedPlan, RaceInputs},
    operations::validate_plan_request,
    params::GeneratePlan,
};

impl Planner {
    /// Validates the request and generates a plan.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When a parameter is malformed
    /// * `PlannerError::InsufficientLeadTime` - When the race is less than
    ///   eight weeks away
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<GeneratedPlan> {
        let inputs = validate_plan_request(params)?;
        self.generate_plan_for(inputs).await
    }

    /// Generates a plan for already validated race inputs.
    ///
    /// The lead time precondition is checked before any strategy runs. An
    /// alternate strategy that fails or returns an invalid plan is replaced
    /// by the rule-based generator.
    pub async fn generate_plan_for(&self, inputs: RaceInputs) -> Result<GeneratedPlan> {
        let today = self.today();
        let structure = plan_structure(&inputs, today)?;

        let runs = self.load_runs().await?;
        let analysis = analyze_running_data(&runs, today);
        let goal_pace = resolve_goal_pace(&inputs, &analysis);

        let fallback = RuleBasedStrategy::new(today);
        let (weeks, strategy) = generate_with_fallback(
            self.strategy.as_deref(),
            &fallback,
            &inputs,
            &analysis,
            &runs,
        )?;

        Ok(GeneratedPlan {
            inputs,
            analysis,
            goal_pace_seconds_per_km: goal_pace,
            structure,
            weeks,
            strategy,
        })
    }
}
