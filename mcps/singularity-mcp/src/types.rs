//! Wire types for the SingularityApp API v2
//!
//! Date fields travel as ISO 8601 strings without a timezone offset and are
//! interpreted as local time by the API, so they stay `String` here; only the
//! dates module builds them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default page size for listing endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// A task record
///
/// A task that carries a project id but no group id will not render inside
/// that project's view in the client application; the group resolver exists
/// to fill the gap before submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// 0=high, 1=normal, 2=low
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Present on recurring tasks; field name is not pinned by the API docs,
    /// so it stays optional and tolerant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrent: Option<bool>,
    /// Set when a task has been completed into a journal day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_date: Option<String>,
}

/// A project record (`P-` prefixed id)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// A task group (section) within a project (`Q-` prefixed id)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Owning project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// A tag record
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Parent tag id for nested tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// A habit record
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// ============================================================================
// Outgoing payloads
// ============================================================================

/// Payload for `POST /task`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    /// 0=high, 1=normal, 2=low
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Parent task id for subtasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Payload for `PATCH /task/{id}` - only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Completing a task is a patch carrying the journal day it lands in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_date: Option<String>,
}

/// Payload for `POST /project`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// HEX color, e.g. "#ad1457"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Emoji hex code, e.g. "1f49e"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Payload for `PATCH /project/{id}`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Payload for `POST /task-group`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskGroup {
    pub title: String,
    /// Owning project id
    pub parent: String,
}

/// Payload for `POST /tag`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Payload for `POST /habit`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Color name, e.g. "red", "blue"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Payload for `POST /habit-progress`
///
/// Progress values: 0=no change, 1=not done (keeps streak), 2=done.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitProgress {
    pub habit: String,
    pub date: String,
    pub progress: i32,
}

/// Payload for `POST /checklist-item`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChecklistItem {
    pub title: String,
    /// Owning task id
    pub parent: String,
}

// ============================================================================
// Queries and response shapes
// ============================================================================

/// Filters for `GET /task`
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub project_id: Option<String>,
    pub include_archived: bool,
    pub include_removed: bool,
    /// When false the API returns only the concrete/current instance of each
    /// recurring task instead of every future occurrence
    pub include_all_recurrence_instances: bool,
    pub start_date_from: Option<String>,
    pub start_date_to: Option<String>,
    pub max_count: Option<u32>,
}

impl TaskQuery {
    /// Render as query parameters; booleans serialize as lowercase strings
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("includeArchived", self.include_archived.to_string()),
            ("includeRemoved", self.include_removed.to_string()),
            (
                "includeAllRecurrenceInstances",
                self.include_all_recurrence_instances.to_string(),
            ),
        ];
        if let Some(ref id) = self.project_id {
            params.push(("projectId", id.clone()));
        }
        if let Some(ref from) = self.start_date_from {
            params.push(("startDateFrom", from.clone()));
        }
        if let Some(ref to) = self.start_date_to {
            params.push(("startDateTo", to.clone()));
        }
        if let Some(count) = self.max_count {
            params.push(("maxCount", count.to_string()));
        }
        params
    }
}

// ============================================================================
// Tool responses
// ============================================================================

/// Response for task list operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskListResponse {
    pub total: usize,
    pub tasks: Vec<Task>,
}

/// Response for project list operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectListResponse {
    pub total: usize,
    pub projects: Vec<Project>,
}

/// Response for task-group list operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskGroupListResponse {
    pub total: usize,
    pub task_groups: Vec<TaskGroup>,
}

/// Response for the default-group lookup
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DefaultGroupResponse {
    pub project_id: String,
    pub group_id: String,
}

/// Response for tag list operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TagListResponse {
    pub total: usize,
    pub tags: Vec<Tag>,
}

/// Response for habit list operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HabitListResponse {
    pub total: usize,
    pub habits: Vec<Habit>,
}

/// The task listing endpoint answers with either `{"tasks": [...]}` or a bare
/// array; anything else is an unrecognized shape
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaskListPayload {
    Wrapped { tasks: Vec<Task> },
    Bare(Vec<Task>),
    Other(Value),
}

impl TaskListPayload {
    /// Flatten to an ordered task list
    ///
    /// Unrecognized shapes degrade to an empty list with a warning - an empty
    /// result is a safe default for a read, and the caller cannot act on the
    /// malformed payload either way.
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            TaskListPayload::Wrapped { tasks } => tasks,
            TaskListPayload::Bare(tasks) => tasks,
            TaskListPayload::Other(value) => {
                tracing::warn!(
                    payload = %value,
                    "unexpected task list shape, treating as empty"
                );
                Vec::new()
            }
        }
    }
}
