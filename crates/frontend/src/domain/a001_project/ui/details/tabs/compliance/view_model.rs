//! ViewModel for the project compliance tab.
//!
//! Subscribes to the route-resolved project data, keeps the compliance
//! collection together with its current sort order, and re-sorts it in
//! place on column header clicks.

use crate::domain::a001_project::resolver::ResolvedProjectData;
use crate::shared::route_data::{RouteDataStream, Subscription};
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a001_project::collection::ComplianceCollection;
use leptos::prelude::*;
use std::sync::Arc;

/// Поле сортировки по умолчанию при поступлении новых данных
const DEFAULT_SORT_FIELD: &str = "date";

/// ViewModel for the compliance tab
#[derive(Clone, Copy)]
pub struct ComplianceTabVm {
    pub loading: RwSignal<bool>,
    pub project: RwSignal<Option<Project>>,
    pub collections: RwSignal<Option<ComplianceCollection>>,

    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,

    sub: RwSignal<Option<Arc<Subscription>>>,
}

impl ComplianceTabVm {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            project: RwSignal::new(None),
            collections: RwSignal::new(None),
            sort_field: RwSignal::new(DEFAULT_SORT_FIELD.to_string()),
            sort_ascending: RwSignal::new(false),
            sub: RwSignal::new(None),
        }
    }

    /// Subscribe to the route data. Called by the owner when the tab enters
    /// the view tree; a repeated call replaces the previous subscription.
    ///
    /// `loading` clears only when the stream completes, not on the first
    /// value: a stream that keeps emitting without completing keeps the
    /// flag raised.
    pub fn attach(&self, route_data: &RouteDataStream<ResolvedProjectData>) {
        self.detach();
        self.loading.set(true);

        let vm = *self;
        let loading = self.loading;
        let sub = route_data.subscribe(
            move |data: &ResolvedProjectData| {
                let Some(project) = data.project.as_ref() else {
                    return;
                };
                let Some(collections) = project.collections.as_ref() else {
                    return;
                };

                vm.project.set(Some(project.clone()));

                // Default sort will be descending by date
                let mut compliance = collections.compliance.clone();
                vm.sort_field.set(DEFAULT_SORT_FIELD.to_string());
                vm.sort_ascending.set(false);
                compliance.sort(DEFAULT_SORT_FIELD, false);
                vm.collections.set(Some(compliance));
            },
            |message| leptos::logging::log!("Route data error: {}", message),
            move || loading.set(false),
        );
        self.sub.set(Some(Arc::new(sub)));
    }

    /// Release the subscription. Safe to call at any point, any number of
    /// times; afterwards no stream callback touches this view model.
    pub fn detach(&self) {
        if let Some(sub) = self.sub.get_untracked() {
            sub.unsubscribe();
        }
        self.sub.set(None);
    }

    /// Toggle the sort column: a click on the active column flips the
    /// direction, a click on a new column sorts it ascending.
    pub fn sort(&self, field: &str) {
        if self.collections.with_untracked(|c| c.is_none()) {
            leptos::logging::warn!("Sort requested before compliance data arrived");
            return;
        }

        if self.sort_field.get_untracked() == field {
            self.sort_ascending.update(|asc| *asc = !*asc);
        } else {
            self.sort_field.set(field.to_string());
            self.sort_ascending.set(true);
        }

        let field = self.sort_field.get_untracked();
        let ascending = self.sort_ascending.get_untracked();
        self.collections.update(|collections| {
            if let Some(collections) = collections.as_mut() {
                collections.sort(&field, ascending);
            }
        });
    }
}

impl Default for ComplianceTabVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_project::aggregate::{Project, ProjectCollections, ProjectId};
    use contracts::domain::a001_project::collection::ComplianceRecord;
    use contracts::enums::compliance_status::ComplianceStatus;
    use uuid::Uuid;

    fn record(name: &str, ymd: (i32, u32, u32), status: ComplianceStatus) -> ComplianceRecord {
        ComplianceRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            reference: format!("DOC-{}", name),
            date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            status,
            comment: None,
        }
    }

    fn bundle(records: Vec<ComplianceRecord>) -> ResolvedProjectData {
        ResolvedProjectData {
            project: Some(Project {
                id: ProjectId::new_v4(),
                code: "PRJ-001".to_string(),
                description: "Тестовый проект".to_string(),
                collections: Some(ProjectCollections {
                    compliance: ComplianceCollection::new(records),
                }),
            }),
        }
    }

    fn three_records() -> Vec<ComplianceRecord> {
        vec![
            record("old", (2023, 1, 10), ComplianceStatus::Approved),
            record("new", (2024, 6, 1), ComplianceStatus::Pending),
            record("mid", (2023, 9, 5), ComplianceStatus::Expired),
        ]
    }

    fn names(vm: &ComplianceTabVm) -> Vec<String> {
        vm.collections
            .get_untracked()
            .map(|c| c.records().iter().map(|r| r.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn resolved_data_is_sorted_by_date_descending() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);

        stream.emit(bundle(three_records()));

        assert_eq!(names(&vm), vec!["new", "mid", "old"]);
        assert_eq!(vm.sort_field.get_untracked(), "date");
        assert!(!vm.sort_ascending.get_untracked());
    }

    #[test]
    fn repeated_sort_on_same_field_flips_direction() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);
        stream.emit(bundle(three_records()));

        vm.sort("date");
        assert!(vm.sort_ascending.get_untracked());
        assert_eq!(names(&vm), vec!["old", "mid", "new"]);

        vm.sort("date");
        assert!(!vm.sort_ascending.get_untracked());
        assert_eq!(names(&vm), vec!["new", "mid", "old"]);
    }

    #[test]
    fn sorting_a_new_field_defaults_to_ascending() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);
        stream.emit(bundle(three_records()));

        vm.sort("status");

        assert_eq!(vm.sort_field.get_untracked(), "status");
        assert!(vm.sort_ascending.get_untracked());
        assert_eq!(names(&vm), vec!["new", "old", "mid"]);
    }

    #[test]
    fn detach_before_data_is_safe_and_blocks_later_emissions() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);

        vm.detach();
        vm.detach();

        stream.emit(bundle(three_records()));
        stream.complete();

        assert!(vm.project.get_untracked().is_none());
        assert!(vm.collections.get_untracked().is_none());
        assert!(vm.loading.get_untracked());
    }

    #[test]
    fn bundle_without_collections_is_ignored() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);
        stream.emit(bundle(three_records()));
        vm.sort("status");

        stream.emit(ResolvedProjectData { project: None });
        stream.emit(ResolvedProjectData {
            project: Some(Project {
                id: ProjectId::new_v4(),
                code: "PRJ-002".to_string(),
                description: "Проект без коллекций".to_string(),
                collections: None,
            }),
        });

        assert_eq!(vm.project.get_untracked().unwrap().code, "PRJ-001");
        assert_eq!(vm.sort_field.get_untracked(), "status");
        assert_eq!(names(&vm), vec!["new", "old", "mid"]);
    }

    #[test]
    fn loading_clears_only_on_stream_completion() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);
        assert!(vm.loading.get_untracked());

        stream.emit(bundle(three_records()));
        assert!(vm.loading.get_untracked());

        stream.complete();
        assert!(!vm.loading.get_untracked());
    }

    #[test]
    fn stream_error_leaves_state_untouched() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);
        stream.emit(bundle(three_records()));

        stream.error("backend down");

        assert!(vm.loading.get_untracked());
        assert_eq!(names(&vm), vec!["new", "mid", "old"]);
    }

    #[test]
    fn sort_without_data_is_a_no_op() {
        let stream = RouteDataStream::new();
        let vm = ComplianceTabVm::new();
        vm.attach(&stream);

        vm.sort("status");

        assert!(vm.collections.get_untracked().is_none());
        assert_eq!(vm.sort_field.get_untracked(), "date");
        assert!(!vm.sort_ascending.get_untracked());
    }

    #[test]
    fn reattach_releases_the_previous_subscription() {
        let first = RouteDataStream::new();
        let second = RouteDataStream::new();
        let vm = ComplianceTabVm::new();

        vm.attach(&first);
        vm.attach(&second);

        first.emit(bundle(three_records()));
        assert!(vm.collections.get_untracked().is_none());

        second.emit(bundle(three_records()));
        assert_eq!(names(&vm), vec!["new", "mid", "old"]);
    }
}
