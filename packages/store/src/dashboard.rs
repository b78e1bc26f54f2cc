//! # Dashboard state
//!
//! The profile view has three tabs. The profile itself is loaded on mount;
//! records and categories are loaded the first time their tab is opened and
//! then kept for as long as the view lives. [`Dashboard::select`] is the only
//! place that decides whether a fetch is due.

use crate::fetch::Fetch;
use crate::models::{Category, Record, UserProfile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Profile,
    Records,
    Categories,
}

/// A resource the dashboard loads lazily.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyResource {
    Records,
    Categories,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub tab: DashboardTab,
    pub user: Fetch<UserProfile>,
    pub records: Fetch<Vec<Record>>,
    pub categories: Fetch<Vec<Category>>,
}

impl Dashboard {
    /// Switch tabs. Returns the resource the caller must now fetch, if any;
    /// the corresponding entry is already marked as loading.
    pub fn select(&mut self, tab: DashboardTab) -> Option<LazyResource> {
        self.tab = tab;
        match tab {
            DashboardTab::Profile => None,
            DashboardTab::Records => self.records.begin().then_some(LazyResource::Records),
            DashboardTab::Categories => {
                self.categories.begin().then_some(LazyResource::Categories)
            }
        }
    }

    /// Drop a deleted category from the loaded list. Returns whether it was present.
    pub fn remove_category(&mut self, id: &str) -> bool {
        let Some(categories) = self.categories.loaded_mut() else {
            return false;
        };
        let before = categories.len();
        categories.retain(|category| category.id != id);
        categories.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: format!("cat-{id}"),
            description: None,
        }
    }

    #[test]
    fn test_select_requests_each_resource_once() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.select(DashboardTab::Profile), None);
        assert_eq!(dashboard.select(DashboardTab::Records), Some(LazyResource::Records));
        assert_eq!(dashboard.select(DashboardTab::Records), None);
        assert_eq!(
            dashboard.select(DashboardTab::Categories),
            Some(LazyResource::Categories)
        );
        dashboard.categories.finish::<String>(Ok(vec![]));
        assert_eq!(dashboard.select(DashboardTab::Categories), None);
        assert_eq!(dashboard.tab, DashboardTab::Categories);
    }

    #[test]
    fn test_remove_category() {
        let mut dashboard = Dashboard::default();
        assert!(!dashboard.remove_category("1"));

        dashboard.categories = Fetch::Loaded(vec![category("1"), category("2")]);
        assert!(dashboard.remove_category("1"));
        assert!(!dashboard.remove_category("1"));
        assert_eq!(dashboard.categories.loaded().unwrap(), &vec![category("2")]);
    }
}
