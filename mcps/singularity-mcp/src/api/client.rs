//! HTTP client for the SingularityApp API v2
//!
//! Issues authenticated JSON requests with an explicit timeout. Non-2xx
//! responses become [`ApiError::Status`] carrying the body text; transport
//! failures propagate as [`ApiError::Transport`]. No automatic retry.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::error::{ApiError, ApiResult};
use crate::config::Config;
use crate::types::{
    Habit, HabitProgress, NewChecklistItem, NewHabit, NewProject, NewTag, NewTask, NewTaskGroup,
    Project, ProjectPatch, Tag, Task, TaskGroup, TaskListPayload, TaskPatch, TaskQuery,
};

/// Client for the SingularityApp API v2
#[derive(Debug, Clone)]
pub struct SingularityClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SingularityClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("singularity-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Issue a request and return the parsed JSON body, if any
    ///
    /// `Ok(None)` means the API answered 204 No Content.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> ApiResult<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "singularity API request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %url, "singularity API error");
            return Err(ApiError::Status { status, body });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }

    /// GET returning a typed body; a 204 here is a shape violation
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let value = self
            .request(Method::GET, path, query, None)
            .await?
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    /// POST/PATCH returning the canonical record as answered by the API
    async fn send_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        let value = self
            .request(method, path, &[], Some(&body))
            .await?
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    /// Listing endpoints answer with a bare array; anything else degrades to
    /// an empty list with a warning (safe default for a read)
    fn normalize_list<T: DeserializeOwned>(value: Value, resource: &str) -> ApiResult<Vec<T>> {
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            other => {
                warn!(resource, payload = %other, "unexpected list shape, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    // ============ TASKS ============

    /// `GET /task` with the given filters, normalized to a flat task list
    pub async fn list_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        let params = query.to_params();
        let value = self
            .request(Method::GET, "/task", &params, None)
            .await?
            .unwrap_or(Value::Null);
        // Decoding into the payload union cannot fail: the catch-all arm
        // absorbs every shape the tagged arms reject
        let payload: TaskListPayload = serde_json::from_value(value)?;
        let tasks = payload.into_tasks();
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    pub async fn get_task(&self, task_id: &str) -> ApiResult<Task> {
        self.get_json(&format!("/task/{}", task_id), &[]).await
    }

    pub async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.send_json(Method::POST, "/task", task).await
    }

    pub async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> ApiResult<Task> {
        self.send_json(Method::PATCH, &format!("/task/{}", task_id), patch)
            .await
    }

    pub async fn delete_task(&self, task_id: &str) -> ApiResult<()> {
        self.request(Method::DELETE, &format!("/task/{}", task_id), &[], None)
            .await?;
        Ok(())
    }

    // ============ PROJECTS ============

    pub async fn list_projects(
        &self,
        include_archived: bool,
        include_removed: bool,
        max_count: u32,
    ) -> ApiResult<Vec<Project>> {
        let params = [
            ("includeArchived", include_archived.to_string()),
            ("includeRemoved", include_removed.to_string()),
            ("maxCount", max_count.to_string()),
        ];
        let value = self
            .request(Method::GET, "/project", &params, None)
            .await?
            .unwrap_or(Value::Null);
        Self::normalize_list(value, "project")
    }

    pub async fn get_project(&self, project_id: &str) -> ApiResult<Project> {
        self.get_json(&format!("/project/{}", project_id), &[])
            .await
    }

    pub async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        self.send_json(Method::POST, "/project", project).await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        patch: &ProjectPatch,
    ) -> ApiResult<Project> {
        self.send_json(Method::PATCH, &format!("/project/{}", project_id), patch)
            .await
    }

    pub async fn delete_project(&self, project_id: &str) -> ApiResult<()> {
        self.request(
            Method::DELETE,
            &format!("/project/{}", project_id),
            &[],
            None,
        )
        .await?;
        Ok(())
    }

    // ============ TASK GROUPS ============

    /// `GET /task-group`, optionally scoped to a project via `parent`
    pub async fn list_task_groups(
        &self,
        project_id: Option<&str>,
        max_count: u32,
    ) -> ApiResult<Vec<TaskGroup>> {
        let mut params = vec![("maxCount", max_count.to_string())];
        if let Some(project_id) = project_id {
            params.push(("parent", project_id.to_string()));
        }
        let value = self
            .request(Method::GET, "/task-group", &params, None)
            .await?
            .unwrap_or(Value::Null);
        Self::normalize_list(value, "task-group")
    }

    pub async fn create_task_group(&self, group: &NewTaskGroup) -> ApiResult<TaskGroup> {
        self.send_json(Method::POST, "/task-group", group).await
    }

    // ============ TAGS ============

    pub async fn list_tags(&self, include_removed: bool, max_count: u32) -> ApiResult<Vec<Tag>> {
        let params = [
            ("includeRemoved", include_removed.to_string()),
            ("maxCount", max_count.to_string()),
        ];
        let value = self
            .request(Method::GET, "/tag", &params, None)
            .await?
            .unwrap_or(Value::Null);
        Self::normalize_list(value, "tag")
    }

    pub async fn create_tag(&self, tag: &NewTag) -> ApiResult<Tag> {
        self.send_json(Method::POST, "/tag", tag).await
    }

    pub async fn delete_tag(&self, tag_id: &str) -> ApiResult<()> {
        self.request(Method::DELETE, &format!("/tag/{}", tag_id), &[], None)
            .await?;
        Ok(())
    }

    // ============ HABITS ============

    pub async fn list_habits(&self, max_count: u32) -> ApiResult<Vec<Habit>> {
        let params = [("maxCount", max_count.to_string())];
        let value = self
            .request(Method::GET, "/habit", &params, None)
            .await?
            .unwrap_or(Value::Null);
        Self::normalize_list(value, "habit")
    }

    pub async fn create_habit(&self, habit: &NewHabit) -> ApiResult<Habit> {
        self.send_json(Method::POST, "/habit", habit).await
    }

    pub async fn mark_habit(&self, progress: &HabitProgress) -> ApiResult<Value> {
        self.send_json(Method::POST, "/habit-progress", progress)
            .await
    }

    pub async fn delete_habit(&self, habit_id: &str) -> ApiResult<()> {
        self.request(Method::DELETE, &format!("/habit/{}", habit_id), &[], None)
            .await?;
        Ok(())
    }

    // ============ CHECKLIST ============

    pub async fn create_checklist_item(&self, item: &NewChecklistItem) -> ApiResult<Value> {
        self.send_json(Method::POST, "/checklist-item", item).await
    }
}
