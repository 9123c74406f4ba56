use crate::shared::api_utils::api_base;
use contracts::domain::a001_project::aggregate::Project;
use gloo_net::http::Request;

/// Загрузка проекта по идентификатору
pub async fn fetch_project(id: &str) -> Result<Project, String> {
    let url = format!("{}/api/a001/projects/{}", api_base(), id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch project: {e}"))?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse project: {e}"))
}
