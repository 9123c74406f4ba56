//! Универсальные утилиты для списковых форм (сортировка по колонкам)

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(field: &str, current_field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс кликабельного заголовка колонки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-header sort-header--active"
    } else {
        "sort-header"
    }
}
