use crate::domain::a001_project::collection::ComplianceCollection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Проект — владелец коллекций записей по категориям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,

    #[serde(default)]
    pub code: String,

    pub description: String,

    /// Коллекции записей; отсутствуют, пока бэкенд их не разрешил
    #[serde(default)]
    pub collections: Option<ProjectCollections>,
}

impl Project {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

/// Коллекции записей проекта по категориям.
///
/// Типизирована только категория `compliance` — единственная, которую
/// читает клиент.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCollections {
    #[serde(default)]
    pub compliance: ComplianceCollection,
}
