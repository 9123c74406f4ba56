use super::view_model::ComplianceTabVm;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a001_project::collection::ComplianceRecord;
use contracts::enums::compliance_status::ComplianceStatus;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug)]
struct ComplianceRow {
    name: String,
    reference: String,
    date: String,
    status: ComplianceStatus,
    comment: String,
}

impl ComplianceRow {
    fn from_record(r: &ComplianceRecord) -> Self {
        Self {
            name: r.name.clone(),
            reference: if r.reference.is_empty() {
                "-".to_string()
            } else {
                r.reference.clone()
            },
            date: r.date.format("%d.%m.%Y").to_string(),
            status: r.status,
            comment: r.comment.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn status_badge_color(status: ComplianceStatus) -> BadgeColor {
    match status {
        ComplianceStatus::Pending => BadgeColor::Informative,
        ComplianceStatus::Submitted => BadgeColor::Brand,
        ComplianceStatus::Approved => BadgeColor::Success,
        ComplianceStatus::Rejected => BadgeColor::Danger,
        ComplianceStatus::Expired => BadgeColor::Warning,
    }
}

/// Вкладка "Комплаенс": записи проекта с сортировкой по колонкам
#[component]
#[allow(non_snake_case)]
pub fn ComplianceTab(vm: ComplianceTabVm) -> impl IntoView {
    let loading = vm.loading;
    let collections = vm.collections;
    let sort_field = vm.sort_field;
    let sort_ascending = vm.sort_ascending;

    view! {
        <div style="padding: 20px;">
            {move || {
                if let Some(collection) = collections.get() {
                    let rows: Vec<ComplianceRow> = collection
                        .records()
                        .iter()
                        .map(ComplianceRow::from_record)
                        .collect();

                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=true min_width=220.0>
                                        "Наименование"
                                        <span
                                            class={move || get_sort_class(&sort_field.get(), "name")}
                                            style="cursor: pointer; margin-left: 4px;"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                vm.sort("name");
                                            }
                                        >
                                            {move || get_sort_indicator("name", &sort_field.get(), sort_ascending.get())}
                                        </span>
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=140.0>
                                        "Документ"
                                        <span
                                            class={move || get_sort_class(&sort_field.get(), "reference")}
                                            style="cursor: pointer; margin-left: 4px;"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                vm.sort("reference");
                                            }
                                        >
                                            {move || get_sort_indicator("reference", &sort_field.get(), sort_ascending.get())}
                                        </span>
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=110.0>
                                        "Дата"
                                        <span
                                            class={move || get_sort_class(&sort_field.get(), "date")}
                                            style="cursor: pointer; margin-left: 4px;"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                vm.sort("date");
                                            }
                                        >
                                            {move || get_sort_indicator("date", &sort_field.get(), sort_ascending.get())}
                                        </span>
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=130.0>
                                        "Статус"
                                        <span
                                            class={move || get_sort_class(&sort_field.get(), "status")}
                                            style="cursor: pointer; margin-left: 4px;"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                vm.sort("status");
                                            }
                                        >
                                            {move || get_sort_indicator("status", &sort_field.get(), sort_ascending.get())}
                                        </span>
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=180.0>
                                        "Комментарий"
                                    </TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {rows.into_iter().map(|row| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {row.name}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {row.reference}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {row.date}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge
                                                    appearance=BadgeAppearance::Filled
                                                    color=status_badge_color(row.status)
                                                >
                                                    {row.status.display_name()}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {row.comment}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any()
                } else if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                            <Spinner />
                            <span>"Загрузка..."</span>
                        </Flex>
                    }.into_any()
                } else {
                    view! {
                        <div style="padding: var(--spacing-4xl); text-align: center; color: var(--color-text-muted);">
                            "Нет данных"
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
