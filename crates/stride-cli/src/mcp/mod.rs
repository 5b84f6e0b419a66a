//! MCP server implementation for Stride
//!
//! Exposes run analysis, goal pace estimation and plan generation as Model
//! Context Protocol tools over stdio.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use stride_core::Planner;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{EstimatePace, GeneratePlan, McpResult};

/// MCP server for Stride
#[derive(Clone)]
pub struct StrideMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    /// Create a new Stride MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "analyze_runs",
        description = "Summarize the runner's last twelve months of runs: average, best and recent paces, weekly volume over the last eight weeks, longest run, recent best efforts at standard distances, fitness trend and how confident the analysis is. Call this first to understand current fitness."
    )]
    async fn analyze_runs(&self) -> McpResult {
        self.handlers().analyze_runs().await
    }

    #[tool(
        name = "estimate_goal_pace",
        description = "Estimate a realistic goal pace for a race distance in meters, extrapolated from recent best efforts with Riegel's formula. Returns the pace, the predicted finish time and a confidence level. Without run history it falls back to 6:00/km."
    )]
    async fn estimate_goal_pace(&self, params: Parameters<EstimatePace>) -> McpResult {
        self.handlers().estimate_goal_pace(params).await
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a periodized training plan ending on race day. Requires race_distance_meters and race_date (YYYY-MM-DD). Optional: goal_time_seconds or goal_pace_seconds_per_km, current_weekly_mileage_km, injury_history, training_experience (beginner/intermediate/advanced), available_days_per_week, preferred_long_run_day (saturday/sunday). Fails when fewer than eight training weeks fit before the race."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Stride builds periodized endurance training plans from a runner's history.

## Core Concepts
- **Analysis**: fitness snapshot from the last twelve months of runs
- **Goal pace**: race pace extrapolated from recent best efforts
- **Plan**: weeks in base, build, sharpening and taper phases, ending on race day. Weekly volume grows by at most 10%, every fourth week is a recovery week.

## Workflow
1. `analyze_runs` to see current fitness
2. `estimate_goal_pace` to agree on a target
3. `generate_plan` with the race distance, date and the runner's preferences

Plans need at least eight weeks before the race. When a race is too close the request is rejected; suggest a later race or a shorter distance."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
