use crate::enums::compliance_status::ComplianceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Запись комплаенса: требование или разрешение, привязанное к проекту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub id: Uuid,
    pub name: String,
    /// Номер документа (разрешения, предписания)
    #[serde(default)]
    pub reference: String,
    pub date: NaiveDate,
    pub status: ComplianceStatus,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ComplianceRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "reference" => self.reference.cmp(&other.reference),
            "date" => self.date.cmp(&other.date),
            "status" => self.status.cmp(&other.status),
            _ => Ordering::Equal,
        }
    }
}

/// Упорядоченная коллекция записей комплаенса.
///
/// Сортировка выполняется на месте; при равенстве значений (и для
/// неизвестного поля) стабильная сортировка сохраняет текущий порядок.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplianceCollection(pub Vec<ComplianceRecord>);

impl ComplianceCollection {
    pub fn new(records: Vec<ComplianceRecord>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[ComplianceRecord] {
        &self.0
    }

    /// Пересортировать записи по указанному полю
    pub fn sort(&mut self, field: &str, ascending: bool) {
        self.0.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, field);
            if ascending { cmp } else { cmp.reverse() }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn names(collection: &ComplianceCollection) -> Vec<&str> {
        collection.records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_date() {
        let mut collection = ComplianceCollection::new(vec![
            record("b", (2023, 9, 5), ComplianceStatus::Submitted),
            record("c", (2024, 6, 1), ComplianceStatus::Pending),
            record("a", (2023, 1, 10), ComplianceStatus::Approved),
        ]);

        collection.sort("date", false);
        assert_eq!(names(&collection), vec!["c", "b", "a"]);

        collection.sort("date", true);
        assert_eq!(names(&collection), vec!["a", "b", "c"]);
    }

    #[test]
    fn sorts_by_status_in_lifecycle_order() {
        let mut collection = ComplianceCollection::new(vec![
            record("expired", (2024, 1, 1), ComplianceStatus::Expired),
            record("approved", (2024, 1, 2), ComplianceStatus::Approved),
            record("pending", (2024, 1, 3), ComplianceStatus::Pending),
        ]);

        collection.sort("status", true);
        assert_eq!(names(&collection), vec!["pending", "approved", "expired"]);
    }

    #[test]
    fn unknown_field_keeps_current_order() {
        let mut collection = ComplianceCollection::new(vec![
            record("b", (2023, 9, 5), ComplianceStatus::Submitted),
            record("c", (2024, 6, 1), ComplianceStatus::Pending),
            record("a", (2023, 1, 10), ComplianceStatus::Approved),
        ]);

        collection.sort("unknown", true);
        assert_eq!(names(&collection), vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_values_keep_relative_order() {
        let same_day = (2024, 3, 15);
        let mut collection = ComplianceCollection::new(vec![
            record("first", same_day, ComplianceStatus::Pending),
            record("second", same_day, ComplianceStatus::Approved),
            record("third", same_day, ComplianceStatus::Rejected),
        ]);

        collection.sort("date", false);
        assert_eq!(names(&collection), vec!["first", "second", "third"]);
    }
}
