use super::super::view_model::ProjectDetailsVm;
use leptos::prelude::*;

/// Вкладка "Общие": карточка проекта
#[component]
#[allow(non_snake_case)]
pub fn GeneralTab(vm: ProjectDetailsVm) -> impl IntoView {
    let project = vm.project;

    view! {
        <div class="general-info" style="max-width: 900px;">
            {move || project.get().map(|p| {
                let compliance_count = p
                    .collections
                    .as_ref()
                    .map(|c| c.compliance.len())
                    .unwrap_or(0);

                view! {
                    <div style="background: var(--color-bg-body); padding: var(--spacing-xl); border-radius: var(--radius-md); border: 1px solid var(--color-border);">
                        <div style="display: grid; grid-template-columns: 180px 1fr; gap: var(--spacing-md); align-items: start; font-size: var(--font-size-sm);">
                            <div style="font-weight: var(--font-weight-semibold); color: var(--color-text-secondary);">"Код:"</div>
                            <div>{p.code.clone()}</div>

                            <div style="font-weight: var(--font-weight-semibold); color: var(--color-text-secondary);">"Наименование:"</div>
                            <div>{p.description.clone()}</div>

                            <div style="font-weight: var(--font-weight-semibold); color: var(--color-text-secondary);">"Идентификатор:"</div>
                            <div><code style="font-size: var(--font-size-xs); color: var(--color-text-muted);">{p.to_string_id()}</code></div>

                            <div style="font-weight: var(--font-weight-semibold); color: var(--color-text-secondary);">"Записей комплаенса:"</div>
                            <div>{compliance_count}</div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
