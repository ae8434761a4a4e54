//! MCP tool handlers implementation

use std::{fmt::Display, sync::Arc};

use dayplan_core::{
    BucketItems, CreateResult, HistoryEntries, HistorySummaries, OperationStatus, Planner,
    UpdateResult, models::ItemChanges, params as core,
};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types stay free of MCP types. The wrapper is transparent to
// serde and forwards the JSON schema, so tool signatures can name it while
// the engine only ever sees the inner value.

/// Generic MCP wrapper for core parameter types with serde integration
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
pub type ItemRef = McpParams<core::ItemRef>;
pub type CreateItem = McpParams<core::CreateItem>;
pub type UpdateItem = McpParams<core::UpdateItem>;
pub type SetupPlan = McpParams<core::SetupPlan>;
pub type HistoryDate = McpParams<core::HistoryDate>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Display) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub fn list_bucket(&self) -> McpResult {
        debug!("list_bucket");
        let items = BucketItems(self.planner.list_bucket());
        text(format!("# Bucket\n\n{items}"))
    }

    pub fn list_required_bucket(&self) -> McpResult {
        debug!("list_required_bucket");
        let items = BucketItems(self.planner.list_required_today());
        text(format!(
            "# Required on {}\n\n{items}",
            self.planner.today()
        ))
    }

    pub fn list_optional_bucket(&self) -> McpResult {
        debug!("list_optional_bucket");
        let items = BucketItems(self.planner.list_optional_today());
        text(format!(
            "# Optional on {}\n\n{items}",
            self.planner.today()
        ))
    }

    pub fn show_item(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("show_item: {params:?}");
        let item = self
            .planner
            .get_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(item)
    }

    pub fn create_item(&self, Parameters(params): Parameters<CreateItem>) -> McpResult {
        debug!("create_item: {params:?}");
        let item = self
            .planner
            .create_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(CreateResult::new(item))
    }

    pub fn update_item(&self, Parameters(params): Parameters<UpdateItem>) -> McpResult {
        debug!("update_item: {params:?}");
        let changes = ItemChanges::try_from(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?
            .describe();
        let item = self
            .planner
            .update_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(UpdateResult::with_changes(item, changes))
    }

    pub fn delete_item(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("delete_item: {params:?}");
        let change = self
            .planner
            .delete_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(OperationStatus::from(&change))
    }

    pub fn disable_item(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("disable_item: {params:?}");
        let change = self
            .planner
            .disable_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(OperationStatus::from(&change))
    }

    pub fn enable_item(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("enable_item: {params:?}");
        let change = self
            .planner
            .enable_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(OperationStatus::from(&change))
    }

    pub fn list_required_for_today(&self) -> McpResult {
        debug!("list_required_for_today");
        let items = BucketItems(self.planner.list_required_for_today());
        text(format!(
            "# Must be included in today's setup ({})\n\n{items}",
            self.planner.today()
        ))
    }

    pub fn setup_plan(&self, Parameters(params): Parameters<SetupPlan>) -> McpResult {
        debug!("setup_plan: {params:?}");
        let plan = self
            .planner
            .setup_plan(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(plan)
    }

    pub fn add_to_plan(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("add_to_plan: {params:?}");
        let plan = self
            .planner
            .add_to_plan(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(plan)
    }

    pub fn remove_from_plan(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("remove_from_plan: {params:?}");
        let plan = self
            .planner
            .remove_from_plan(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(plan)
    }

    pub fn complete_item(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("complete_item: {params:?}");
        let receipt = self
            .planner
            .complete_item(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(receipt)
    }

    pub fn show_plan(&self) -> McpResult {
        debug!("show_plan");
        let plan = self.planner.get_plan().map_err(|e| to_mcp_error(&e))?;
        text(plan)
    }

    pub fn list_history(&self) -> McpResult {
        debug!("list_history");
        let summaries = HistorySummaries(self.planner.list_history());
        text(format!("# History\n\n{summaries}"))
    }

    pub fn show_history_for_date(&self, Parameters(params): Parameters<HistoryDate>) -> McpResult {
        debug!("show_history_for_date: {params:?}");
        let entries = self
            .planner
            .history_for_date(params.as_ref())
            .map_err(|e| to_mcp_error(&e))?;
        text(format!(
            "# History for {}\n\n{}",
            params.as_ref().date,
            HistoryEntries(entries)
        ))
    }

    pub fn show_item_history(&self, Parameters(params): Parameters<ItemRef>) -> McpResult {
        debug!("show_item_history: {params:?}");
        let entries = HistoryEntries(self.planner.history_for_item(params.as_ref()));
        text(format!(
            "# History for item {}\n\n{entries}",
            params.as_ref().id
        ))
    }
}
