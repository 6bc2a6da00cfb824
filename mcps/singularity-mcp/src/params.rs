//! Parameter definitions for singularity-mcp tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

// ============================================================================
// Tasks
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    /// Filter by project ID (e.g. P-...)
    #[serde(default)]
    pub project_id: Option<String>,
    /// Include tasks starting at or after this instant (ISO 8601, local time)
    #[serde(default)]
    pub start_date_from: Option<String>,
    /// Include tasks starting before this instant (exclusive)
    #[serde(default)]
    pub start_date_to: Option<String>,
    #[serde(default)]
    pub include_archived: bool,
    #[serde(default)]
    pub include_removed: bool,
    /// Expand recurring tasks into every future occurrence (unbounded; leave
    /// off for day views)
    #[serde(default)]
    pub include_all_recurrence_instances: bool,
    #[serde(default)]
    pub max_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    /// Task ID (e.g. T-...)
    pub task_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    pub title: String,
    /// Start date (ISO 8601, e.g. 2024-01-01T00:00:00); omit for Inbox
    #[serde(default)]
    pub start: Option<String>,
    /// Task description/notes
    #[serde(default)]
    pub note: Option<String>,
    /// 0=high, 1=normal, 2=low
    #[serde(default)]
    pub priority: Option<i32>,
    /// Project to file the task under; its default group is filled in
    /// automatically unless group_id is given
    #[serde(default)]
    pub project_id: Option<String>,
    /// Explicit task group (section) within the project
    #[serde(default)]
    pub group_id: Option<String>,
    /// Parent task ID for creating subtasks
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    pub task_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    /// Move the task to this project; its default group is resolved unless
    /// group_id is also given
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompleteTaskParams {
    pub task_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    pub task_id: String,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[serde(default)]
    pub include_archived: bool,
    #[serde(default)]
    pub include_removed: bool,
    #[serde(default)]
    pub max_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    /// HEX color (e.g. "#ad1457")
    #[serde(default)]
    pub color: Option<String>,
    /// Emoji hex code (e.g. "1f49e")
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    pub project_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteProjectParams {
    pub project_id: String,
}

// ============================================================================
// Task groups
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTaskGroupsParams {
    /// Project whose groups to list
    pub project_id: String,
    #[serde(default)]
    pub max_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetDefaultTaskGroupParams {
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskGroupParams {
    pub title: String,
    /// Project the group belongs to
    pub project_id: String,
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTagsParams {
    #[serde(default)]
    pub include_removed: bool,
    #[serde(default)]
    pub max_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTagParams {
    pub title: String,
    /// Parent tag ID for nested tags
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTagParams {
    pub tag_id: String,
}

// ============================================================================
// Habits
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListHabitsParams {
    #[serde(default)]
    pub max_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateHabitParams {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Color name (red, pink, purple, blue, green, ...)
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarkHabitParams {
    pub habit_id: String,
    /// Date (ISO 8601); defaults to today at midnight
    #[serde(default)]
    pub date: Option<String>,
    /// true=done, false=not done (keeps streak)
    #[serde(default = "default_true")]
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteHabitParams {
    pub habit_id: String,
}

// ============================================================================
// Checklist
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddChecklistItemParams {
    /// Task to add the checklist item to
    pub task_id: String,
    /// Checklist item text
    pub title: String,
}
