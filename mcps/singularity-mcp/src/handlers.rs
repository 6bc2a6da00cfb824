//! Handler implementations for singularity-mcp tools
//!
//! Each handler converts MCP params to API types, calls the service or the
//! client, and converts results to CallToolResult with proper error handling.

use mcp_common::{invalid_params, json_success, CallToolResult, McpError, ResultExt};
use serde_json::json;
use tracing::warn;

use crate::dates;
use crate::params::*;
use crate::service::TaskService;
use crate::types::{
    DefaultGroupResponse, Habit, HabitListResponse, HabitProgress, NewChecklistItem, NewHabit,
    NewProject, NewTag, NewTask, NewTaskGroup, Project, ProjectListResponse, ProjectPatch, Tag,
    TagListResponse, TaskGroup, TaskGroupListResponse, TaskListResponse, TaskPatch, TaskQuery,
    DEFAULT_PAGE_SIZE,
};

/// Normalize a caller-supplied project id
///
/// Empty strings count as absent, and ids without the `P-` prefix are
/// dropped rather than sent upstream (the API would file the task nowhere
/// useful). Both cases are logged, matching the forgiving tool contract.
pub(crate) fn clean_project_id(project_id: Option<String>) -> Option<String> {
    let id = project_id?;
    let id = id.trim();
    if id.is_empty() {
        warn!("project_id is empty, task will be created without project");
        return None;
    }
    if !id.starts_with("P-") {
        warn!(project_id = id, "invalid project_id format, expected P-..., dropping");
        return None;
    }
    Some(id.to_string())
}

// ============================================================================
// Tasks
// ============================================================================

pub async fn list_tasks(
    service: &TaskService,
    params: ListTasksParams,
) -> Result<CallToolResult, McpError> {
    let query = TaskQuery {
        project_id: params.project_id,
        include_archived: params.include_archived,
        include_removed: params.include_removed,
        include_all_recurrence_instances: params.include_all_recurrence_instances,
        start_date_from: params.start_date_from,
        start_date_to: params.start_date_to,
        max_count: Some(params.max_count.unwrap_or(DEFAULT_PAGE_SIZE)),
    };

    let tasks = service.list_tasks(&query).await.to_mcp_err()?;

    json_success(&TaskListResponse {
        total: tasks.len(),
        tasks,
    })
}

pub async fn get_task(
    service: &TaskService,
    params: GetTaskParams,
) -> Result<CallToolResult, McpError> {
    let task = service.api().get_task(&params.task_id).await.to_mcp_err()?;
    json_success(&task)
}

pub async fn create_task(
    service: &TaskService,
    params: CreateTaskParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Err(invalid_params("title cannot be empty"));
    }

    let task = NewTask {
        title: params.title,
        priority: params.priority.unwrap_or(1),
        note: params.note,
        start: params.start,
        project: clean_project_id(params.project_id),
        group: params.group_id,
        parent: params.parent,
    };

    let created = service.create_task(task).await.to_mcp_err()?;
    json_success(&created)
}

pub async fn update_task(
    service: &TaskService,
    params: UpdateTaskParams,
) -> Result<CallToolResult, McpError> {
    let patch = TaskPatch {
        title: params.title,
        note: params.note,
        priority: params.priority,
        start: params.start,
        project: clean_project_id(params.project_id),
        group: params.group_id,
        journal_date: None,
    };

    let updated = service
        .update_task(&params.task_id, patch)
        .await
        .to_mcp_err()?;
    json_success(&updated)
}

pub async fn complete_task(
    service: &TaskService,
    params: CompleteTaskParams,
) -> Result<CallToolResult, McpError> {
    let completed = service.complete_task(&params.task_id).await.to_mcp_err()?;
    json_success(&completed)
}

pub async fn delete_task(
    service: &TaskService,
    params: DeleteTaskParams,
) -> Result<CallToolResult, McpError> {
    service
        .api()
        .delete_task(&params.task_id)
        .await
        .to_mcp_err()?;

    json_success(&json!({
        "status": "deleted",
        "task_id": params.task_id,
    }))
}

pub async fn get_today_tasks(service: &TaskService) -> Result<CallToolResult, McpError> {
    let tasks = service.today_tasks().await.to_mcp_err()?;

    json_success(&TaskListResponse {
        total: tasks.len(),
        tasks,
    })
}

// ============================================================================
// Projects
// ============================================================================

pub async fn list_projects(
    service: &TaskService,
    params: ListProjectsParams,
) -> Result<CallToolResult, McpError> {
    let projects: Vec<Project> = service
        .api()
        .list_projects(
            params.include_archived,
            params.include_removed,
            params.max_count.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await
        .to_mcp_err()?;

    json_success(&ProjectListResponse {
        total: projects.len(),
        projects,
    })
}

pub async fn get_project(
    service: &TaskService,
    params: GetProjectParams,
) -> Result<CallToolResult, McpError> {
    let project = service
        .api()
        .get_project(&params.project_id)
        .await
        .to_mcp_err()?;
    json_success(&project)
}

pub async fn create_project(
    service: &TaskService,
    params: CreateProjectParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Err(invalid_params("title cannot be empty"));
    }

    let project = NewProject {
        title: params.title,
        note: params.note,
        color: params.color,
        emoji: params.emoji,
    };

    let created = service.api().create_project(&project).await.to_mcp_err()?;
    json_success(&created)
}

pub async fn update_project(
    service: &TaskService,
    params: UpdateProjectParams,
) -> Result<CallToolResult, McpError> {
    let patch = ProjectPatch {
        title: params.title,
        note: params.note,
        color: params.color,
    };

    let updated = service
        .api()
        .update_project(&params.project_id, &patch)
        .await
        .to_mcp_err()?;
    json_success(&updated)
}

pub async fn delete_project(
    service: &TaskService,
    params: DeleteProjectParams,
) -> Result<CallToolResult, McpError> {
    service
        .api()
        .delete_project(&params.project_id)
        .await
        .to_mcp_err()?;

    json_success(&json!({
        "status": "deleted",
        "project_id": params.project_id,
    }))
}

// ============================================================================
// Task groups
// ============================================================================

pub async fn list_task_groups(
    service: &TaskService,
    params: ListTaskGroupsParams,
) -> Result<CallToolResult, McpError> {
    if params.project_id.trim().is_empty() {
        return Err(invalid_params("project_id cannot be empty"));
    }

    let task_groups: Vec<TaskGroup> = service
        .api()
        .list_task_groups(
            Some(&params.project_id),
            params.max_count.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await
        .to_mcp_err()?;

    json_success(&TaskGroupListResponse {
        total: task_groups.len(),
        task_groups,
    })
}

pub async fn get_default_task_group(
    service: &TaskService,
    params: GetDefaultTaskGroupParams,
) -> Result<CallToolResult, McpError> {
    if params.project_id.trim().is_empty() {
        return Err(invalid_params("project_id cannot be empty"));
    }

    let group_id = service
        .default_group(&params.project_id)
        .await
        .to_mcp_err()?;

    json_success(&DefaultGroupResponse {
        project_id: params.project_id,
        group_id,
    })
}

pub async fn create_task_group(
    service: &TaskService,
    params: CreateTaskGroupParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Err(invalid_params("title cannot be empty"));
    }
    if params.project_id.trim().is_empty() {
        return Err(invalid_params("project_id cannot be empty"));
    }

    let group = NewTaskGroup {
        title: params.title,
        parent: params.project_id.clone(),
    };

    let created = service
        .api()
        .create_task_group(&group)
        .await
        .to_mcp_err()?;

    // A freshly created group may change which group is "first" for the
    // project; forget the cached default so the next resolution re-lists
    service.invalidate_group(&params.project_id).await;

    json_success(&created)
}

// ============================================================================
// Tags
// ============================================================================

pub async fn list_tags(
    service: &TaskService,
    params: ListTagsParams,
) -> Result<CallToolResult, McpError> {
    let tags: Vec<Tag> = service
        .api()
        .list_tags(
            params.include_removed,
            params.max_count.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await
        .to_mcp_err()?;

    json_success(&TagListResponse {
        total: tags.len(),
        tags,
    })
}

pub async fn create_tag(
    service: &TaskService,
    params: CreateTagParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Err(invalid_params("title cannot be empty"));
    }

    let tag = NewTag {
        title: params.title,
        parent: params.parent,
    };

    let created = service.api().create_tag(&tag).await.to_mcp_err()?;
    json_success(&created)
}

pub async fn delete_tag(
    service: &TaskService,
    params: DeleteTagParams,
) -> Result<CallToolResult, McpError> {
    service.api().delete_tag(&params.tag_id).await.to_mcp_err()?;

    json_success(&json!({
        "status": "deleted",
        "tag_id": params.tag_id,
    }))
}

// ============================================================================
// Habits
// ============================================================================

pub async fn list_habits(
    service: &TaskService,
    params: ListHabitsParams,
) -> Result<CallToolResult, McpError> {
    let habits: Vec<Habit> = service
        .api()
        .list_habits(params.max_count.unwrap_or(DEFAULT_PAGE_SIZE))
        .await
        .to_mcp_err()?;

    json_success(&HabitListResponse {
        total: habits.len(),
        habits,
    })
}

pub async fn create_habit(
    service: &TaskService,
    params: CreateHabitParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Err(invalid_params("title cannot be empty"));
    }

    let habit = NewHabit {
        title: params.title,
        description: params.description,
        color: params.color,
    };

    let created = service.api().create_habit(&habit).await.to_mcp_err()?;
    json_success(&created)
}

pub async fn mark_habit(
    service: &TaskService,
    params: MarkHabitParams,
) -> Result<CallToolResult, McpError> {
    let progress = HabitProgress {
        habit: params.habit_id,
        date: params.date.unwrap_or_else(dates::today_midnight),
        // 2=done, 1=not done but keeps the streak
        progress: if params.done { 2 } else { 1 },
    };

    let result = service.api().mark_habit(&progress).await.to_mcp_err()?;
    json_success(&result)
}

pub async fn delete_habit(
    service: &TaskService,
    params: DeleteHabitParams,
) -> Result<CallToolResult, McpError> {
    service
        .api()
        .delete_habit(&params.habit_id)
        .await
        .to_mcp_err()?;

    json_success(&json!({
        "status": "deleted",
        "habit_id": params.habit_id,
    }))
}

// ============================================================================
// Checklist
// ============================================================================

pub async fn add_checklist_item(
    service: &TaskService,
    params: AddChecklistItemParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Err(invalid_params("title cannot be empty"));
    }

    let item = NewChecklistItem {
        title: params.title,
        parent: params.task_id,
    };

    let created = service
        .api()
        .create_checklist_item(&item)
        .await
        .to_mcp_err()?;
    json_success(&created)
}
