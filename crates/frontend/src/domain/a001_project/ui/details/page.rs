//! Main page component for project details
//!
//! Thin wrapper that:
//! - Creates the view models and wires them to the route resolver
//! - Renders header and tab bar
//! - Routes to tab components
//! - Releases subscriptions on teardown

use super::tabs::{ComplianceTab, ComplianceTabVm, GeneralTab};
use super::view_model::ProjectDetailsVm;
use crate::domain::a001_project::resolver::ProjectResolver;
use leptos::prelude::*;
use thaw::*;

/// Main component for project details
#[component]
#[allow(non_snake_case)]
pub fn ProjectDetail(project_id: String) -> impl IntoView {
    let resolver = ProjectResolver::new(project_id);
    let route_data = resolver.data();

    let vm = ProjectDetailsVm::new();
    vm.attach(&route_data);

    let compliance_vm = ComplianceTabVm::new();
    compliance_vm.attach(&route_data);

    resolver.resolve();

    // Release subscriptions and complete the stream when the page leaves
    // the view tree.
    {
        let resolver = resolver.clone();
        on_cleanup(move || {
            compliance_vm.detach();
            vm.detach();
            resolver.dispose();
        });
    }

    view! {
        <div class="page page--detail">
            <Header vm=vm />

            <div class="page__content">
                {move || {
                    if vm.project.get().is_some() {
                        view! {
                            <div>
                                <TabBar vm=vm />

                                <div style="padding-top: var(--spacing-lg);">
                                    <TabContent vm=vm compliance_vm=compliance_vm />
                                </div>
                            </div>
                        }.into_any()
                    } else if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                                <Spinner />
                                <span>"Загрузка..."</span>
                            </Flex>
                        }.into_any()
                    } else {
                        view! { <div>"Нет данных"</div> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Header component with the project title
#[component]
fn Header(vm: ProjectDetailsVm) -> impl IntoView {
    let title = vm.title();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2>{move || title.get()}</h2>
            </div>
        </div>
    }
}

/// Tab bar component using THAW buttons
#[component]
fn TabBar(vm: ProjectDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            <Button
                appearance=Signal::derive(move || if active_tab.get() == "general" {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Subtle
                })
                size=ButtonSize::Small
                on_click=move |_| vm.set_tab("general")
            >
                "Общие"
            </Button>

            <Button
                appearance=Signal::derive(move || if active_tab.get() == "compliance" {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Subtle
                })
                size=ButtonSize::Small
                on_click=move |_| vm.set_tab("compliance")
            >
                "Комплаенс"
            </Button>
        </Flex>
    }
}

/// Tab content component - routes to the appropriate tab
#[component]
fn TabContent(vm: ProjectDetailsVm, compliance_vm: ComplianceTabVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        {move || match active_tab.get() {
            "compliance" => view! { <ComplianceTab vm=compliance_vm /> }.into_any(),
            _ => view! { <GeneralTab vm=vm /> }.into_any(),
        }}
    }
}
