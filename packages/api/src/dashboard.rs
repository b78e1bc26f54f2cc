//! Profile, record and category loading for the dashboard view.

use store::{Category, Dashboard, LazyResource, Record, UserProfile};

use crate::client::CorpusApi;
use crate::error::ApiError;

pub const USER_LOAD_FAILED: &str = "Failed to load user data. Please try again.";

/// Result of fetching one lazily loaded resource.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadedResource {
    Records(Result<Vec<Record>, ApiError>),
    Categories(Result<Vec<Category>, ApiError>),
}

impl LoadedResource {
    pub fn apply_to(self, dashboard: &mut Dashboard) {
        match self {
            LoadedResource::Records(result) => dashboard.records.finish(result),
            LoadedResource::Categories(result) => dashboard.categories.finish(result),
        }
    }
}

/// Outcome of a category deletion, keyed by the category id.
#[derive(Clone, Debug, PartialEq)]
pub struct Deletion {
    pub id: String,
    pub result: Result<(), ApiError>,
}

impl Deletion {
    /// Remove the category locally if the server deleted it. Returns whether
    /// the list changed.
    pub fn apply_to(self, dashboard: &mut Dashboard) -> bool {
        match self.result {
            Ok(()) => dashboard.remove_category(&self.id),
            Err(_) => false,
        }
    }
}

pub async fn load_user<A: CorpusApi>(api: &A) -> Result<UserProfile, ApiError> {
    api.current_user().await.inspect_err(|e| {
        tracing::error!("failed to load user: {e}");
    })
}

/// Fetch the resource that [`Dashboard::select`] asked for.
pub async fn load<A: CorpusApi>(api: &A, resource: LazyResource) -> LoadedResource {
    match resource {
        LazyResource::Records => LoadedResource::Records(api.list_records().await),
        LazyResource::Categories => LoadedResource::Categories(api.list_categories().await),
    }
}

pub async fn delete_category<A: CorpusApi>(api: &A, id: &str) -> Deletion {
    let result = api.delete_category(id).await;
    if let Err(e) = &result {
        tracing::error!(id, "failed to delete category: {e}");
    }
    Deletion {
        id: id.to_string(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{category, MockApi};
    use store::{DashboardTab, Fetch};

    async fn select<A: CorpusApi>(api: &A, dashboard: &mut Dashboard, tab: DashboardTab) {
        if let Some(resource) = dashboard.select(tab) {
            load(api, resource).await.apply_to(dashboard);
        }
    }

    #[tokio::test]
    async fn test_tabs_fetch_once() {
        let api = MockApi::new();
        let mut dashboard = Dashboard::default();

        for tab in [
            DashboardTab::Categories,
            DashboardTab::Records,
            DashboardTab::Profile,
            DashboardTab::Categories,
            DashboardTab::Records,
        ] {
            select(&api, &mut dashboard, tab).await;
        }

        assert_eq!(api.count("list_categories"), 1);
        assert_eq!(api.count("list_records"), 1);
        assert_eq!(dashboard.categories.loaded().map(Vec::len), Some(2));
        assert_eq!(dashboard.records.loaded().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried_on_reselect() {
        let failing = MockApi::failing(ApiError::Network("offline".to_string()));
        let mut dashboard = Dashboard::default();
        select(&failing, &mut dashboard, DashboardTab::Records).await;
        assert!(dashboard.records.error().is_some());

        let api = MockApi::new();
        select(&api, &mut dashboard, DashboardTab::Records).await;
        assert_eq!(api.count("list_records"), 1);
        assert!(dashboard.records.loaded().is_some());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_unchanged() {
        let mut dashboard = Dashboard {
            categories: Fetch::Loaded(vec![category("c-1"), category("c-2")]),
            ..Default::default()
        };

        let failing = MockApi::failing(ApiError::from_status(403, r#"{"detail":"forbidden"}"#));
        let changed = delete_category(&failing, "c-1").await.apply_to(&mut dashboard);
        assert!(!changed);
        assert_eq!(dashboard.categories.loaded().map(Vec::len), Some(2));

        let api = MockApi::new();
        assert!(delete_category(&api, "c-1").await.apply_to(&mut dashboard));
        assert_eq!(dashboard.categories.loaded().unwrap(), &vec![category("c-2")]);
    }

    #[tokio::test]
    async fn test_load_user() {
        let user = load_user(&MockApi::new()).await.unwrap();
        assert_eq!(user.display_name(), "ravi");

        let mut dashboard = Dashboard::default();
        let failing = MockApi::failing(ApiError::Network("offline".to_string()));
        dashboard
            .user
            .finish(load_user(&failing).await.map_err(|_| USER_LOAD_FAILED));
        assert_eq!(dashboard.user.error(), Some(USER_LOAD_FAILED));
    }
}
