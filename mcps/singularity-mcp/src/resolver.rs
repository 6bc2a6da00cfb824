//! Default task-group resolution with a process-local cache
//!
//! The client application only renders a task inside a project's view when
//! the task carries both the project id and a group (section) id. The API
//! does not fill the group in, so every create/move into a project needs one
//! looked up. Project/group topology changes rarely relative to process
//! lifetime, which makes a lifetime-of-the-process cache acceptable;
//! [`GroupResolver::invalidate`] is the manual lever when it does change.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api::{ApiError, ApiResult, SingularityClient};
use crate::types::TaskGroup;

/// Where default groups are looked up when the cache misses
///
/// The trait is the seam that lets tests count lookups without a network.
#[async_trait]
pub trait GroupSource: Send + Sync {
    /// First task group of the project, in the API's listing order, if any
    async fn first_group(&self, project_id: &str) -> ApiResult<Option<TaskGroup>>;
}

#[async_trait]
impl GroupSource for SingularityClient {
    async fn first_group(&self, project_id: &str) -> ApiResult<Option<TaskGroup>> {
        // Only the first result is used, so one is all we ask for
        let groups = self.list_task_groups(Some(project_id), 1).await?;
        Ok(groups.into_iter().next())
    }
}

/// Project id -> default task-group id, filled lazily
///
/// "Default" means first-listed; the API does not document a tie-break for
/// projects with several groups, so this leans on its listing order being
/// stable.
pub struct GroupResolver {
    cache: Mutex<HashMap<String, String>>,
}

impl GroupResolver {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the default group for a project, hitting the source at most
    /// once per project for the lifetime of the cache
    ///
    /// The lock is held across the fetch, so concurrent resolutions of the
    /// same project cannot race to issue duplicate listing calls. Failures
    /// propagate uncached - the next call retries against the source. A
    /// project with zero groups is [`ApiError::NoTaskGroup`], never an empty
    /// id.
    pub async fn resolve(&self, source: &dyn GroupSource, project_id: &str) -> ApiResult<String> {
        let mut cache = self.cache.lock().await;

        if let Some(group_id) = cache.get(project_id) {
            debug!(project_id, %group_id, "task group cache hit");
            return Ok(group_id.clone());
        }

        let group = source
            .first_group(project_id)
            .await?
            .ok_or_else(|| ApiError::NoTaskGroup {
                project_id: project_id.to_string(),
            })?;

        info!(project_id, group_id = %group.id, "resolved default task group");
        cache.insert(project_id.to_string(), group.id.clone());
        Ok(group.id)
    }

    /// Drop the cached entry for one project
    pub async fn invalidate(&self, project_id: &str) {
        self.cache.lock().await.remove(project_id);
    }

    /// Drop every cached entry
    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }
}

impl Default for GroupResolver {
    fn default() -> Self {
        Self::new()
    }
}
