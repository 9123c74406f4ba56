use crate::domain::a001_project::ui::details::ProjectDetail;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Идентификатор проекта из строки запроса (`?project=<id>`)
fn project_id_from_location() -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("project").cloned()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    match project_id_from_location() {
        Some(project_id) => view! { <ProjectDetail project_id=project_id /> }.into_any(),
        None => view! {
            <div style="padding: var(--spacing-4xl); text-align: center; color: var(--color-text-muted);">
                "Проект не выбран"
            </div>
        }
        .into_any(),
    }
}
