use serde::{Deserialize, Serialize};

/// Статусы требований комплаенса
///
/// Порядок вариантов — жизненный цикл требования; сортировка по колонке
/// "Статус" использует именно его.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Pending,
    Submitted,
    Approved,
    Rejected,
    Expired,
}

impl ComplianceStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            ComplianceStatus::Pending => "pending",
            ComplianceStatus::Submitted => "submitted",
            ComplianceStatus::Approved => "approved",
            ComplianceStatus::Rejected => "rejected",
            ComplianceStatus::Expired => "expired",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplianceStatus::Pending => "Ожидает",
            ComplianceStatus::Submitted => "Подано",
            ComplianceStatus::Approved => "Согласовано",
            ComplianceStatus::Rejected => "Отклонено",
            ComplianceStatus::Expired => "Просрочено",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<ComplianceStatus> {
        vec![
            ComplianceStatus::Pending,
            ComplianceStatus::Submitted,
            ComplianceStatus::Approved,
            ComplianceStatus::Rejected,
            ComplianceStatus::Expired,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ComplianceStatus::Pending),
            "submitted" => Some(ComplianceStatus::Submitted),
            "approved" => Some(ComplianceStatus::Approved),
            "rejected" => Some(ComplianceStatus::Rejected),
            "expired" => Some(ComplianceStatus::Expired),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
