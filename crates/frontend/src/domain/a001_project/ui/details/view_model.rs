//! ViewModel for the project detail page
//!
//! Holds the header data and the active tab; the compliance tab carries its
//! own view model.

use crate::domain::a001_project::resolver::ResolvedProjectData;
use crate::shared::route_data::{RouteDataStream, Subscription};
use contracts::domain::a001_project::aggregate::Project;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the project detail page
#[derive(Clone, Copy)]
pub struct ProjectDetailsVm {
    pub project: RwSignal<Option<Project>>,
    pub loading: RwSignal<bool>,

    // === UI State ===
    pub active_tab: RwSignal<&'static str>,

    sub: RwSignal<Option<Arc<Subscription>>>,
}

impl ProjectDetailsVm {
    pub fn new() -> Self {
        Self {
            project: RwSignal::new(None),
            loading: RwSignal::new(false),
            active_tab: RwSignal::new("general"),
            sub: RwSignal::new(None),
        }
    }

    /// Subscribe to the route data for the page header.
    pub fn attach(&self, route_data: &RouteDataStream<ResolvedProjectData>) {
        self.detach();
        self.loading.set(true);

        let project = self.project;
        let loading = self.loading;
        let sub = route_data.subscribe(
            move |data: &ResolvedProjectData| {
                if let Some(p) = data.project.as_ref() {
                    project.set(Some(p.clone()));
                }
            },
            |message| leptos::logging::log!("Route data error: {}", message),
            move || loading.set(false),
        );
        self.sub.set(Some(Arc::new(sub)));
    }

    /// Release the subscription; idempotent.
    pub fn detach(&self) {
        if let Some(sub) = self.sub.get_untracked() {
            sub.unsubscribe();
        }
        self.sub.set(None);
    }

    /// Заголовок формы
    pub fn title(&self) -> Signal<String> {
        let project = self.project;
        Signal::derive(move || {
            project
                .get()
                .map(|p| format!("Проект {}", p.description))
                .unwrap_or_else(|| "Проект".to_string())
        })
    }

    /// Set active tab
    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }
}

impl Default for ProjectDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
