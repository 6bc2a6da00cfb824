//! Task operations façade
//!
//! Owns the API client and the group resolver, and applies the group-fill
//! rule all task writes share: a task going into a project must carry a
//! group id, and a group without a project is meaningless downstream.

use tracing::warn;

use crate::api::{ApiResult, SingularityClient};
use crate::dates;
use crate::resolver::{GroupResolver, GroupSource};
use crate::types::{NewTask, Task, TaskPatch, TaskQuery, DEFAULT_PAGE_SIZE};

/// Façade over task operations, with group resolution amortized via the cache
pub struct TaskService {
    api: SingularityClient,
    groups: GroupResolver,
}

impl TaskService {
    pub fn new(api: SingularityClient) -> Self {
        Self {
            api,
            groups: GroupResolver::new(),
        }
    }

    /// The underlying client, for operations with no façade logic
    pub fn api(&self) -> &SingularityClient {
        &self.api
    }

    /// Create a task, filling in the project's default group when a project
    /// is given without one
    pub async fn create_task(&self, mut task: NewTask) -> ApiResult<Task> {
        task.group = fill_group(
            &self.groups,
            &self.api,
            task.project.as_deref(),
            task.group.take(),
        )
        .await?;
        self.api.create_task(&task).await
    }

    /// Update a task; moving it into a project without naming a group
    /// re-resolves for that project (the cache is keyed by project id)
    pub async fn update_task(&self, task_id: &str, mut patch: TaskPatch) -> ApiResult<Task> {
        if patch.project.is_some() || patch.group.is_some() {
            patch.group = fill_group(
                &self.groups,
                &self.api,
                patch.project.as_deref(),
                patch.group.take(),
            )
            .await?;
        }
        self.api.update_task(task_id, &patch).await
    }

    /// Complete a task by filing it into today's journal day
    pub async fn complete_task(&self, task_id: &str) -> ApiResult<Task> {
        let patch = TaskPatch {
            journal_date: Some(dates::today_journal_date()),
            ..Default::default()
        };
        self.api.update_task(task_id, &patch).await
    }

    pub async fn list_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        self.api.list_tasks(query).await
    }

    /// Tasks whose start falls in [today 00:00, tomorrow 00:00)
    ///
    /// Recurring tasks are limited to their current instance; expanding every
    /// future occurrence would make the result set unbounded.
    pub async fn today_tasks(&self) -> ApiResult<Vec<Task>> {
        let (from, to) = dates::today_range();
        self.api
            .list_tasks(&TaskQuery {
                start_date_from: Some(from),
                start_date_to: Some(to),
                include_all_recurrence_instances: false,
                max_count: Some(DEFAULT_PAGE_SIZE),
                ..Default::default()
            })
            .await
    }

    /// Default (first-listed) task group for a project, cached per process
    pub async fn default_group(&self, project_id: &str) -> ApiResult<String> {
        self.groups.resolve(&self.api, project_id).await
    }

    /// Forget the cached default group for a project, e.g. after its groups
    /// were reorganized in the app
    pub async fn invalidate_group(&self, project_id: &str) {
        self.groups.invalidate(project_id).await;
    }
}

/// The group-fill rule shared by create and update
///
/// - project + explicit group: the group is used verbatim, no listing call
/// - project without group: the project's default group is resolved
/// - group without project: dropped with a warning
pub(crate) async fn fill_group(
    groups: &GroupResolver,
    source: &dyn GroupSource,
    project: Option<&str>,
    group: Option<String>,
) -> ApiResult<Option<String>> {
    match (project, group) {
        (Some(_), Some(group)) => Ok(Some(group)),
        (Some(project), None) => Ok(Some(groups.resolve(source, project).await?)),
        (None, Some(group)) => {
            warn!(%group, "task group given without a project, dropping it");
            Ok(None)
        }
        (None, None) => Ok(None),
    }
}
