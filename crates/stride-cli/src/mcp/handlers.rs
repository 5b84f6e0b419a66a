//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stride_core::{params as core, Planner, TrainingPlan};

use super::{errors::to_mcp_error, prompts::PROMPT_TEMPLATES};

/// Generic MCP wrapper for core parameter types.
///
/// Adds JSON deserialization and schema generation on top of the core
/// parameter types without a wrapper struct per tool. `#[serde(transparent)]`
/// passes the JSON straight through to the wrapped type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type EstimatePace = McpParams<core::EstimatePace>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn analyze_runs(&self) -> McpResult {
        debug!("analyze_runs");

        let analysis = self
            .planner
            .analyze()
            .await
            .map_err(|e| to_mcp_error("Failed to analyze runs", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            analysis.to_string(),
        )]))
    }

    pub async fn estimate_goal_pace(
        &self,
        Parameters(params): Parameters<EstimatePace>,
    ) -> McpResult {
        debug!("estimate_goal_pace: {:?}", params);

        let estimate = self
            .planner
            .estimate_goal_pace(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to estimate goal pace", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            estimate.to_string(),
        )]))
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let plan = self
            .planner
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            TrainingPlan(&plan).to_string(),
        )]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = PROMPT_TEMPLATES
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = PROMPT_TEMPLATES
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let prompt_text = template.render(request.arguments.as_ref())?;

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
