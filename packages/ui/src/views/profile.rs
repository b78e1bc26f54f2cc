//! Dashboard: profile details plus lazily loaded records and categories.

use api::dashboard::{self, USER_LOAD_FAILED};
use dioxus::prelude::*;
use store::{Category, Dashboard, DashboardTab, Fetch, Record, UserProfile};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPlus, FaTrash};
use crate::response_box::Spinner;
use crate::session::use_api;
use crate::Icon;

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(fallback)
}

#[component]
pub fn ProfileView(on_create_record: EventHandler<()>, on_translate: EventHandler<()>) -> Element {
    let client = use_api();
    let mut dashboard = use_signal(Dashboard::default);

    // The profile is fetched on every mount; the other tabs wait for a click.
    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                dashboard.write().user.begin();
                let result = dashboard::load_user(&client).await;
                dashboard
                    .write()
                    .user
                    .finish(result.map_err(|_| USER_LOAD_FAILED));
            });
        });
    }

    let select_tab = {
        let client = client.clone();
        move |tab: DashboardTab| {
            let Some(resource) = dashboard.write().select(tab) else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let loaded = dashboard::load(&client, resource).await;
                loaded.apply_to(&mut dashboard.write());
            });
        }
    };

    let delete = move |id: String| {
        let client = client.clone();
        spawn(async move {
            let deletion = dashboard::delete_category(&client, &id).await;
            deletion.apply_to(&mut dashboard.write());
        });
    };

    let active = dashboard.read().tab;
    let tab_class = move |tab: DashboardTab| if active == tab { "tab active" } else { "tab" };

    rsx! {
        div {
            class: "dashboard-container",

            div {
                class: "dashboard-tabs",
                button {
                    class: tab_class(DashboardTab::Profile),
                    onclick: {
                        let mut select_tab = select_tab.clone();
                        move |_| select_tab(DashboardTab::Profile)
                    },
                    "Profile"
                }
                button {
                    class: tab_class(DashboardTab::Records),
                    onclick: {
                        let mut select_tab = select_tab.clone();
                        move |_| select_tab(DashboardTab::Records)
                    },
                    "Records"
                }
                button {
                    class: tab_class(DashboardTab::Categories),
                    onclick: {
                        let mut select_tab = select_tab.clone();
                        move |_| select_tab(DashboardTab::Categories)
                    },
                    "Categories"
                }
                button {
                    class: "tab translation-tab",
                    onclick: move |_| on_translate.call(()),
                    "Translation"
                }
            }

            div {
                class: "dashboard-content",
                {match active {
                    DashboardTab::Profile => rsx! {
                        ProfileSection { user: dashboard.read().user.clone() }
                    },
                    DashboardTab::Records => rsx! {
                        RecordsSection {
                            records: dashboard.read().records.clone(),
                            on_create: move |_| on_create_record.call(()),
                        }
                    },
                    DashboardTab::Categories => rsx! {
                        CategoriesSection {
                            categories: dashboard.read().categories.clone(),
                            on_delete: delete.clone(),
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn ProfileSection(user: Fetch<UserProfile>) -> Element {
    rsx! {
        div {
            class: "profile-section",
            h2 { "User Profile" }
            if let Some(error) = user.error() {
                p { class: "error", "{error}" }
            }
            {match user.loaded() {
                Some(profile) => rsx! {
                    div {
                        class: "profile-info",
                        ProfileField { label: "Name", value: profile.display_name().to_string() }
                        ProfileField { label: "Phone", value: or_fallback(&profile.phone, "Not provided").to_string() }
                        ProfileField { label: "Email", value: or_fallback(&profile.email, "Not provided").to_string() }
                        ProfileField { label: "Gender", value: or_fallback(&profile.gender, "Not specified").to_string() }
                        ProfileField { label: "Place", value: or_fallback(&profile.place, "Not specified").to_string() }
                        ProfileField { label: "Member since", value: or_fallback(&profile.member_since, "Not provided").to_string() }
                        ProfileField { label: "Last login", value: or_fallback(&profile.last_login, "Not provided").to_string() }
                    }
                },
                None if user.error().is_none() => rsx! { p { "Loading..." } },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn ProfileField(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "profile-field",
            span { class: "field-label", "{label}:" }
            span { class: "field-value", "{value}" }
        }
    }
}

#[component]
fn RecordsSection(records: Fetch<Vec<Record>>, on_create: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "records-section",
            h2 { "Records" }
            Button {
                variant: ButtonVariant::Primary,
                class: "create-record-btn",
                onclick: move |_| on_create.call(()),
                Icon { icon: FaPlus, width: 14, height: 14 }
                "Create New Record"
            }
            {match &records {
                Fetch::NotFetched | Fetch::Loading => rsx! {
                    p { Spinner {} " Loading records..." }
                },
                Fetch::Failed(error) => rsx! { p { class: "error", "{error}" } },
                Fetch::Loaded(items) if items.is_empty() => rsx! { p { "No records found." } },
                Fetch::Loaded(items) => rsx! {
                    div {
                        class: "records-grid",
                        for record in items.iter() {
                            div {
                                key: "{record.id}",
                                class: "record-card",
                                h3 { "{record.title}" }
                                if let Some(description) = &record.description {
                                    p { "{description}" }
                                }
                                RecordMeta { record: record.clone() }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn RecordMeta(record: Record) -> Element {
    let language = or_fallback(&record.language, "-");
    let category = or_fallback(&record.category, "-");
    rsx! {
        div {
            class: "record-meta",
            span { "Language: {language}" }
            span { "Category: {category}" }
        }
    }
}

#[component]
fn CategoriesSection(categories: Fetch<Vec<Category>>, on_delete: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "categories-section",
            h2 { "Categories" }
            {match &categories {
                Fetch::NotFetched | Fetch::Loading => rsx! {
                    p { Spinner {} " Loading categories..." }
                },
                Fetch::Failed(error) => rsx! { p { class: "error", "{error}" } },
                Fetch::Loaded(items) if items.is_empty() => rsx! { p { "No categories available." } },
                Fetch::Loaded(items) => rsx! {
                    div {
                        class: "categories-list",
                        for category in items.iter() {
                            div {
                                key: "{category.id}",
                                class: "category-item",
                                div {
                                    class: "category-info",
                                    h3 { "{category.name}" }
                                    if let Some(description) = &category.description {
                                        p { "{description}" }
                                    }
                                }
                                button {
                                    class: "delete-btn",
                                    title: "Delete category",
                                    onclick: {
                                        let id = category.id.clone();
                                        move |_| on_delete.call(id.clone())
                                    },
                                    Icon { icon: FaTrash, width: 16, height: 16 }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(&None, "Not provided"), "Not provided");
        assert_eq!(or_fallback(&Some(String::new()), "Not specified"), "Not specified");
        assert_eq!(or_fallback(&Some("Hyderabad".to_string()), "Not specified"), "Hyderabad");
    }
}
