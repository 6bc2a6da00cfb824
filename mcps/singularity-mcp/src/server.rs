//! MCP Server implementation for the SingularityApp proxy
//!
//! This module defines the main MCP server that exposes the task manager
//! operations as tools. Handler implementations are in the handlers module.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::api::SingularityClient;
use crate::config::Config;
use crate::handlers;
use crate::params::*;
use crate::service::TaskService;

/// The main Singularity MCP Server
#[derive(Clone)]
pub struct SingularityMcpServer {
    service: Arc<TaskService>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl SingularityMcpServer {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let api = SingularityClient::new(config)?;

        Ok(Self {
            service: Arc::new(TaskService::new(api)),
            tool_router: Self::tool_router(),
        })
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    #[tool(description = "List tasks, filtered by project, start-date window, etc.")]
    async fn list_tasks(
        &self,
        Parameters(params): Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_tasks(&self.service, params).await
    }

    #[tool(description = "Fetch a task by ID")]
    async fn get_task(
        &self,
        Parameters(params): Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task(&self.service, params).await
    }

    #[tool(
        description = "Create a task; when a project is given its default task group is filled in automatically"
    )]
    async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_task(&self.service, params).await
    }

    #[tool(description = "Update task fields (title, dates, notes, project/group)")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(&self.service, params).await
    }

    #[tool(description = "Mark a task as completed")]
    async fn complete_task(
        &self,
        Parameters(params): Parameters<CompleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::complete_task(&self.service, params).await
    }

    #[tool(description = "Delete a task permanently")]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_task(&self.service, params).await
    }

    #[tool(description = "All tasks scheduled to start today (current recurrence instances only)")]
    async fn get_today_tasks(&self) -> Result<CallToolResult, McpError> {
        handlers::get_today_tasks(&self.service).await
    }

    // ========================================================================
    // Projects
    // ========================================================================

    #[tool(description = "List projects")]
    async fn list_projects(
        &self,
        Parameters(params): Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_projects(&self.service, params).await
    }

    #[tool(description = "Fetch a project by ID")]
    async fn get_project(
        &self,
        Parameters(params): Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_project(&self.service, params).await
    }

    #[tool(description = "Create a project")]
    async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_project(&self.service, params).await
    }

    #[tool(description = "Update project fields (title, note, color)")]
    async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_project(&self.service, params).await
    }

    #[tool(description = "Delete a project permanently")]
    async fn delete_project(
        &self,
        Parameters(params): Parameters<DeleteProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_project(&self.service, params).await
    }

    // ========================================================================
    // Task groups
    // ========================================================================

    #[tool(description = "List the task groups (sections) of a project")]
    async fn list_task_groups(
        &self,
        Parameters(params): Parameters<ListTaskGroupsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_task_groups(&self.service, params).await
    }

    #[tool(description = "Default (first-listed) task group of a project, cached per process")]
    async fn get_default_task_group(
        &self,
        Parameters(params): Parameters<GetDefaultTaskGroupParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_default_task_group(&self.service, params).await
    }

    #[tool(description = "Create a task group (section) inside a project")]
    async fn create_task_group(
        &self,
        Parameters(params): Parameters<CreateTaskGroupParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_task_group(&self.service, params).await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    #[tool(description = "List tags")]
    async fn list_tags(
        &self,
        Parameters(params): Parameters<ListTagsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_tags(&self.service, params).await
    }

    #[tool(description = "Create a tag (optionally nested under a parent tag)")]
    async fn create_tag(
        &self,
        Parameters(params): Parameters<CreateTagParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_tag(&self.service, params).await
    }

    #[tool(description = "Delete a tag")]
    async fn delete_tag(
        &self,
        Parameters(params): Parameters<DeleteTagParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_tag(&self.service, params).await
    }

    // ========================================================================
    // Habits
    // ========================================================================

    #[tool(description = "List habits")]
    async fn list_habits(
        &self,
        Parameters(params): Parameters<ListHabitsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_habits(&self.service, params).await
    }

    #[tool(description = "Create a habit")]
    async fn create_habit(
        &self,
        Parameters(params): Parameters<CreateHabitParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_habit(&self.service, params).await
    }

    #[tool(description = "Mark a habit as done (or explicitly not done, keeping the streak) for a date")]
    async fn mark_habit(
        &self,
        Parameters(params): Parameters<MarkHabitParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::mark_habit(&self.service, params).await
    }

    #[tool(description = "Delete a habit")]
    async fn delete_habit(
        &self,
        Parameters(params): Parameters<DeleteHabitParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_habit(&self.service, params).await
    }

    // ========================================================================
    // Checklist
    // ========================================================================

    #[tool(description = "Add a checklist item to a task")]
    async fn add_checklist_item(
        &self,
        Parameters(params): Parameters<AddChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_checklist_item(&self.service, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SingularityMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "SingularityApp task manager MCP server. Proxies the public API v2 for tasks, \
                 projects, task groups, tags, and habits. Tasks created inside a project get the \
                 project's default task group filled in automatically so they render in the \
                 project view."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
