//! Tests for the resolver cache, group-fill rule, and response normalization

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::api::{ApiError, ApiResult};
    use crate::handlers::clean_project_id;
    use crate::resolver::{GroupResolver, GroupSource};
    use crate::service::fill_group;
    use crate::types::{NewTask, TaskGroup, TaskListPayload, TaskPatch, TaskQuery};

    fn group(id: &str) -> TaskGroup {
        TaskGroup {
            id: id.to_string(),
            title: format!("Group {}", id),
            parent: None,
        }
    }

    /// Group source backed by a fixed project -> groups table, counting calls
    struct StaticGroups {
        by_project: HashMap<String, Vec<TaskGroup>>,
        calls: AtomicUsize,
    }

    impl StaticGroups {
        fn new(entries: &[(&str, &[&str])]) -> Self {
            let by_project = entries
                .iter()
                .map(|&(project, groups)| {
                    (
                        project.to_string(),
                        groups.iter().map(|&id| group(id)).collect(),
                    )
                })
                .collect();
            Self {
                by_project,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GroupSource for StaticGroups {
        async fn first_group(&self, project_id: &str) -> ApiResult<Option<TaskGroup>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .by_project
                .get(project_id)
                .and_then(|groups| groups.first().cloned()))
        }
    }

    /// Group source that fails a fixed number of times before succeeding
    struct FlakyGroups {
        failures_left: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GroupSource for FlakyGroups {
        async fn first_group(&self, _project_id: &str) -> ApiResult<Option<TaskGroup>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(ApiError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".to_string(),
                });
            }
            Ok(Some(group("Q-1")))
        }
    }

    // ========================================================================
    // Resolver cache
    // ========================================================================

    #[tokio::test]
    async fn resolve_is_cached_after_first_success() {
        let source = StaticGroups::new(&[("P-1", &["Q-1", "Q-2"])]);
        let resolver = GroupResolver::new();

        let first = resolver.resolve(&source, "P-1").await.unwrap();
        let second = resolver.resolve(&source, "P-1").await.unwrap();

        assert_eq!(first, "Q-1");
        assert_eq!(second, "Q-1");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn resolve_picks_the_first_listed_group() {
        let source = StaticGroups::new(&[("P-1", &["Q-7", "Q-1"])]);
        let resolver = GroupResolver::new();

        assert_eq!(resolver.resolve(&source, "P-1").await.unwrap(), "Q-7");
    }

    #[tokio::test]
    async fn resolve_caches_per_project() {
        let source = StaticGroups::new(&[("P-1", &["Q-1"]), ("P-2", &["Q-9"])]);
        let resolver = GroupResolver::new();

        assert_eq!(resolver.resolve(&source, "P-1").await.unwrap(), "Q-1");
        assert_eq!(resolver.resolve(&source, "P-2").await.unwrap(), "Q-9");
        assert_eq!(resolver.resolve(&source, "P-1").await.unwrap(), "Q-1");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn project_without_groups_is_a_distinct_error_and_never_cached() {
        let source = StaticGroups::new(&[("P-1", &[])]);
        let resolver = GroupResolver::new();

        for _ in 0..2 {
            match resolver.resolve(&source, "P-1").await {
                Err(ApiError::NoTaskGroup { project_id }) => assert_eq!(project_id, "P-1"),
                other => panic!("expected NoTaskGroup, got {:?}", other.map(|_| ())),
            }
        }
        // Both attempts went to the source: an empty project is not a cache entry
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn listing_failure_propagates_uncached() {
        let source = FlakyGroups {
            failures_left: AtomicUsize::new(1),
            calls: AtomicUsize::new(0),
        };
        let resolver = GroupResolver::new();

        assert!(matches!(
            resolver.resolve(&source, "P-1").await,
            Err(ApiError::Status { .. })
        ));
        // The failure was not cached; the retry reaches the source and succeeds
        assert_eq!(resolver.resolve(&source, "P-1").await.unwrap(), "Q-1");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn clear_drops_every_cached_entry() {
        let source = StaticGroups::new(&[("P-1", &["Q-1"]), ("P-2", &["Q-9"])]);
        let resolver = GroupResolver::new();

        resolver.resolve(&source, "P-1").await.unwrap();
        resolver.resolve(&source, "P-2").await.unwrap();
        resolver.clear().await;
        resolver.resolve(&source, "P-1").await.unwrap();
        resolver.resolve(&source, "P-2").await.unwrap();

        assert_eq!(source.calls(), 4);
    }

    #[tokio::test]
    async fn invalidate_forces_a_fresh_lookup() {
        let source = StaticGroups::new(&[("P-1", &["Q-1"])]);
        let resolver = GroupResolver::new();

        resolver.resolve(&source, "P-1").await.unwrap();
        resolver.invalidate("P-1").await;
        resolver.resolve(&source, "P-1").await.unwrap();

        assert_eq!(source.calls(), 2);
    }

    // ========================================================================
    // Group-fill rule
    // ========================================================================

    #[tokio::test]
    async fn fill_resolves_default_group_when_project_given_without_group() {
        let source = StaticGroups::new(&[("P-1", &["Q-1", "Q-2"])]);
        let resolver = GroupResolver::new();

        let group = fill_group(&resolver, &source, Some("P-1"), None).await.unwrap();
        assert_eq!(group.as_deref(), Some("Q-1"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn explicit_group_is_used_verbatim_without_any_listing() {
        let source = StaticGroups::new(&[("P-1", &["Q-1", "Q-2"])]);
        let resolver = GroupResolver::new();

        let group = fill_group(&resolver, &source, Some("P-1"), Some("Q-9".to_string()))
            .await
            .unwrap();
        assert_eq!(group.as_deref(), Some("Q-9"));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn group_without_project_is_dropped() {
        let source = StaticGroups::new(&[]);
        let resolver = GroupResolver::new();

        let group = fill_group(&resolver, &source, None, Some("Q-9".to_string()))
            .await
            .unwrap();
        assert_eq!(group, None);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn nothing_to_fill_without_project_or_group() {
        let source = StaticGroups::new(&[]);
        let resolver = GroupResolver::new();

        let group = fill_group(&resolver, &source, None, None).await.unwrap();
        assert_eq!(group, None);
        assert_eq!(source.calls(), 0);
    }

    // ========================================================================
    // Listing-shape normalization
    // ========================================================================

    fn normalize(json: &str) -> Vec<String> {
        let payload: TaskListPayload = serde_json::from_str(json).unwrap();
        payload.into_tasks().into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn wrapped_task_list_is_flattened() {
        let ids = normalize(r#"{"tasks": [{"id": "T-1", "title": "a"}, {"id": "T-2", "title": "b"}]}"#);
        assert_eq!(ids, ["T-1", "T-2"]);
    }

    #[test]
    fn bare_task_list_passes_through_in_order() {
        let ids = normalize(r#"[{"id": "T-2", "title": "b"}, {"id": "T-1", "title": "a"}]"#);
        assert_eq!(ids, ["T-2", "T-1"]);
    }

    #[test]
    fn empty_object_yields_no_tasks() {
        assert!(normalize("{}").is_empty());
    }

    #[test]
    fn null_yields_no_tasks() {
        assert!(normalize("null").is_empty());
    }

    #[test]
    fn scalar_yields_no_tasks() {
        assert!(normalize("42").is_empty());
    }

    // ========================================================================
    // Query and payload wire format
    // ========================================================================

    #[test]
    fn task_query_booleans_serialize_lowercase() {
        let query = TaskQuery {
            include_archived: true,
            ..Default::default()
        };
        let params = query.to_params();
        assert!(params.contains(&("includeArchived", "true".to_string())));
        assert!(params.contains(&("includeRemoved", "false".to_string())));
        assert!(params.contains(&("includeAllRecurrenceInstances", "false".to_string())));
    }

    #[test]
    fn task_query_includes_set_filters_only() {
        let query = TaskQuery {
            project_id: Some("P-1".to_string()),
            start_date_from: Some("2025-12-08T00:00:00".to_string()),
            start_date_to: Some("2025-12-09T00:00:00".to_string()),
            max_count: Some(100),
            ..Default::default()
        };
        let params = query.to_params();
        assert!(params.contains(&("projectId", "P-1".to_string())));
        assert!(params.contains(&("startDateFrom", "2025-12-08T00:00:00".to_string())));
        assert!(params.contains(&("startDateTo", "2025-12-09T00:00:00".to_string())));
        assert!(params.contains(&("maxCount", "100".to_string())));

        let bare = TaskQuery::default().to_params();
        assert!(bare.iter().all(|(key, _)| *key != "projectId"));
        assert!(bare.iter().all(|(key, _)| *key != "maxCount"));
    }

    #[test]
    fn new_task_payload_skips_unset_fields() {
        let task = NewTask {
            title: "X".to_string(),
            priority: 1,
            project: Some("P-1".to_string()),
            group: Some("Q-1".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["title"], "X");
        assert_eq!(value["priority"], 1);
        assert_eq!(value["project"], "P-1");
        assert_eq!(value["group"], "Q-1");
        assert!(value.get("note").is_none());
        assert!(value.get("start").is_none());
        assert!(value.get("parent").is_none());
    }

    #[test]
    fn task_patch_journal_date_uses_api_field_name() {
        let patch = TaskPatch {
            journal_date: Some("2025-12-08".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();

        assert_eq!(value["journalDate"], "2025-12-08");
        assert!(value.get("title").is_none());
    }

    // ========================================================================
    // Project id normalization
    // ========================================================================

    #[test]
    fn empty_and_malformed_project_ids_are_dropped() {
        assert_eq!(clean_project_id(None), None);
        assert_eq!(clean_project_id(Some("".to_string())), None);
        assert_eq!(clean_project_id(Some("   ".to_string())), None);
        assert_eq!(clean_project_id(Some("X-123".to_string())), None);
        assert_eq!(
            clean_project_id(Some("P-123".to_string())),
            Some("P-123".to_string())
        );
        assert_eq!(
            clean_project_id(Some("  P-123  ".to_string())),
            Some("P-123".to_string())
        );
    }
}
