//! MCP server implementation for dayplan
//!
//! Exposes every planner operation as an MCP tool over stdio. Tool results
//! are Markdown text; planner failures become JSON-RPC errors whose `data`
//! carries the planner's stable error code.

use std::sync::Arc;

use anyhow::Result;
use dayplan_core::Planner;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
// Re-export parameter types and result type from handlers for external use
pub use handlers::{CreateItem, HistoryDate, ItemRef, McpResult, SetupPlan, UpdateItem};

const INSTRUCTIONS: &str = r#"dayplan keeps a bucket of reusable tasks and builds a plan for the current day from it.

## Core Concepts
- **Bucket items**: task definitions with a title, notes, a `required` flag, an optional `deadlineDate` (YYYY-MM-DD) and a free-form `repeatEvery` tag
- **Required today**: an enabled item that is `required`, or whose deadline is today
- **Daily plan**: the items chosen for today and which of them are completed. It resets automatically when the date changes
- **History**: one record per day of what the plan looked like, including skipped items

## Typical Day
1. `list_required_for_today` to see what the plan must contain
2. `setup_plan` once with every required item plus any optional ones (only allowed once per day)
3. `add_to_plan` for anything picked up later
4. `complete_item` as work gets done, or `remove_from_plan` to skip an optional item
5. `show_plan` at any time; `list_history` to look back

## Rules
- Disabled items can never be planned; disabling or deleting an item drops it from today's plan
- Completed items and items required today cannot be skipped

## Tool Categories
- **Bucket**: list_bucket, list_required_bucket, list_optional_bucket, show_item, create_item, update_item, delete_item, disable_item, enable_item
- **Plan**: list_required_for_today, setup_plan, add_to_plan, remove_from_plan, complete_item, show_plan
- **History**: list_history, show_history_for_date, show_item_history"#;

/// MCP server for dayplan
#[derive(Clone)]
pub struct DayplanMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DayplanMcpServer {
    /// Create a new dayplan MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    /// One line per registered tool: its name and description.
    pub fn tools(&self) -> Vec<String> {
        let mut tools: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| match &tool.description {
                Some(description) => format!("{}: {description}", tool.name),
                None => tool.name.to_string(),
            })
            .collect();
        tools.sort();
        tools
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "list_bucket",
        description = "List every bucket item that has not been deleted, including disabled ones, with IDs, flags, deadlines and notes."
    )]
    async fn list_bucket(&self) -> McpResult {
        self.handlers().list_bucket()
    }

    #[tool(
        name = "list_required_bucket",
        description = "List the bucket items that are required today: enabled items marked required, or whose deadline is today."
    )]
    async fn list_required_bucket(&self) -> McpResult {
        self.handlers().list_required_bucket()
    }

    #[tool(
        name = "list_optional_bucket",
        description = "List the bucket items that are not required today. Disabled items appear here but cannot be planned."
    )]
    async fn list_optional_bucket(&self) -> McpResult {
        self.handlers().list_optional_bucket()
    }

    #[tool(
        name = "show_item",
        description = "Show a single bucket item by ID."
    )]
    async fn show_item(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().show_item(params)
    }

    #[tool(
        name = "create_item",
        description = "Create a bucket item. Requires a non-empty title. Optional: notes, required (default false), deadlineDate (YYYY-MM-DD, the item becomes required on that date) and repeatEvery (informational tag, default 'custom'). Returns the new item ID."
    )]
    async fn create_item(&self, params: Parameters<CreateItem>) -> McpResult {
        self.handlers().create_item(params)
    }

    #[tool(
        name = "update_item",
        description = "Update fields of a bucket item by ID. Only supplied fields change; at least one is required. Pass deadlineDate: null to clear the deadline."
    )]
    async fn update_item(&self, params: Parameters<UpdateItem>) -> McpResult {
        self.handlers().update_item(params)
    }

    #[tool(
        name = "delete_item",
        description = "Delete a bucket item. It disappears from every listing and is removed from today's plan. Its history is kept."
    )]
    async fn delete_item(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().delete_item(params)
    }

    #[tool(
        name = "disable_item",
        description = "Disable a bucket item so it can no longer be planned. It is removed from today's plan but stays in the bucket."
    )]
    async fn disable_item(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().disable_item(params)
    }

    #[tool(
        name = "enable_item",
        description = "Re-enable a disabled bucket item. Today's plan is not changed."
    )]
    async fn enable_item(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().enable_item(params)
    }

    #[tool(
        name = "list_required_for_today",
        description = "List the items that today's setup_plan call must include."
    )]
    async fn list_required_for_today(&self) -> McpResult {
        self.handlers().list_required_for_today()
    }

    #[tool(
        name = "setup_plan",
        description = "Set up today's plan from a list of item IDs (itemIds). Runs once per day. Every item required today must be included, and every ID must name an enabled item. Duplicates are ignored."
    )]
    async fn setup_plan(&self, params: Parameters<SetupPlan>) -> McpResult {
        self.handlers().setup_plan(params)
    }

    #[tool(
        name = "add_to_plan",
        description = "Add one enabled item to today's plan. Works before or after setup_plan; adding an already planned item changes nothing."
    )]
    async fn add_to_plan(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().add_to_plan(params)
    }

    #[tool(
        name = "remove_from_plan",
        description = "Skip a planned item for today. The skip is recorded in history. Completed items and items required today cannot be skipped."
    )]
    async fn remove_from_plan(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().remove_from_plan(params)
    }

    #[tool(
        name = "complete_item",
        description = "Mark a planned item as completed for today. Completing it again is harmless."
    )]
    async fn complete_item(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().complete_item(params)
    }

    #[tool(
        name = "show_plan",
        description = "Show today's plan: its date, whether setup is locked, and each planned item with its completion state."
    )]
    async fn show_plan(&self) -> McpResult {
        self.handlers().show_plan()
    }

    #[tool(
        name = "list_history",
        description = "List one summary per recorded day, newest first: planned, completed and skipped counts."
    )]
    async fn list_history(&self) -> McpResult {
        self.handlers().list_history()
    }

    #[tool(
        name = "show_history_for_date",
        description = "Show the history rows recorded for a date (YYYY-MM-DD)."
    )]
    async fn show_history_for_date(&self, params: Parameters<HistoryDate>) -> McpResult {
        self.handlers().show_history_for_date(params)
    }

    #[tool(
        name = "show_item_history",
        description = "Show every history row for an item across all days, newest first. Works for deleted items."
    )]
    async fn show_item_history(&self, params: Parameters<ItemRef>) -> McpResult {
        self.handlers().show_item_history(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DayplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: DayplanMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting dayplan MCP server on stdio");
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
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use dayplan_core::PlannerBuilder;

    use super::*;

    #[test]
    fn test_every_operation_is_registered() {
        let server = DayplanMcpServer::new(PlannerBuilder::new().build());
        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        for expected in [
            "list_bucket",
            "list_required_bucket",
            "list_optional_bucket",
            "show_item",
            "create_item",
            "update_item",
            "delete_item",
            "disable_item",
            "enable_item",
            "list_required_for_today",
            "setup_plan",
            "add_to_plan",
            "remove_from_plan",
            "complete_item",
            "show_plan",
            "list_history",
            "show_history_for_date",
            "show_item_history",
        ] {
            assert!(names.iter().any(|name| name == expected), "missing {expected}");
        }
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn test_server_info_enables_tools() {
        let server = DayplanMcpServer::new(PlannerBuilder::new().build());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("setup_plan"));
    }
}
