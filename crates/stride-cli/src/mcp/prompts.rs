//! Prompt templates for MCP server

use std::sync::LazyLock;

use rmcp::{model::JsonObject, ErrorData as McpError};

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitutes `{name}` placeholders with the given arguments.
    ///
    /// Optional arguments that are not supplied are replaced with an empty
    /// string.
    pub fn render(&self, args: Option<&JsonObject>) -> Result<String, McpError> {
        let mut prompt_text = self.template.clone();

        for arg_def in &self.arguments {
            let placeholder = format!("{{{}}}", arg_def.name);
            let value = match args.and_then(|args| args.get(&arg_def.name)) {
                Some(value) => match value.as_str() {
                    Some(text) => text.to_string(),
                    None if value.is_number() => value.to_string(),
                    None => {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ))
                    }
                },
                None if arg_def.required => {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ))
                }
                None => String::new(),
            };
            prompt_text = prompt_text.replace(&placeholder, &value);
        }

        Ok(prompt_text)
    }
}

/// Predefined prompt templates
pub static PROMPT_TEMPLATES: LazyLock<Vec<PromptTemplate>> = LazyLock::new(prompt_templates);

fn prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "race_plan".to_string(),
        description: "Build a race training plan with Stride's MCP tools".to_string(),
        template: r#"You are **Stride Coach**, an endurance coach building a training plan.

# Race
- Distance: {race_distance_meters} meters
- Date: {race_date}
- Runner notes: {notes}

# Step 1: Understand Current Fitness
Call `analyze_runs` and read the summary. Note the weekly volume, the longest
recent run, the fitness trend and the confidence level. With low confidence,
tell the runner the plan relies on default assumptions.

# Step 2: Agree on a Goal Pace
Call `estimate_goal_pace` with the race distance. Present the predicted finish
time and ask whether the runner wants to keep it or set their own goal time.

# Step 3: Generate the Plan
Call `generate_plan` with:
- **race_distance_meters** and **race_date** from above
- **goal_time_seconds** or **goal_pace_seconds_per_km** if the runner chose one
- **training_experience**, **available_days_per_week**,
  **preferred_long_run_day** and **injury_history** from the runner notes

If the tool reports that there is not enough time before the race, suggest a
later race or a shorter distance instead of retrying the same request.

# Step 4: Walk Through the Plan
Summarize the phases, the peak week and the taper. Point out recovery weeks
and remind the runner that easy days should feel easy."#
            .to_string(),
        arguments: vec![
            PromptTemplateArg {
                name: "race_distance_meters".to_string(),
                description: "Race distance in meters (e.g. 21097.5)".to_string(),
                required: true,
            },
            PromptTemplateArg {
                name: "race_date".to_string(),
                description: "Race day as YYYY-MM-DD".to_string(),
                required: true,
            },
            PromptTemplateArg {
                name: "notes".to_string(),
                description: "Experience, available days, injuries or anything else the coach should know".to_string(),
                required: false,
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn race_plan() -> &'static PromptTemplate {
        PROMPT_TEMPLATES
            .iter()
            .find(|t| t.name == "race_plan")
            .expect("race_plan template")
    }

    #[test]
    fn test_render_substitutes_arguments() {
        let args = json!({
            "race_distance_meters": 42195,
            "race_date": "2027-04-25",
            "notes": "beginner, sore knee last spring"
        });
        let text = race_plan()
            .render(args.as_object())
            .expect("valid arguments");

        assert!(text.contains("- Distance: 42195 meters"));
        assert!(text.contains("- Date: 2027-04-25"));
        assert!(text.contains("sore knee"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_render_requires_race_date() {
        let args = json!({ "race_distance_meters": "5000" });
        let err = race_plan()
            .render(args.as_object())
            .expect_err("missing date");
        assert!(err.message.contains("race_date"));
    }

    #[test]
    fn test_render_without_arguments_fails() {
        assert!(race_plan().render(None).is_err());
    }
}
