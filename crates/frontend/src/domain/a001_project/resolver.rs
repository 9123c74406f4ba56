//! Route-level resolution of project data.
//!
//! The detail page owns a resolver; view models only see the stream it
//! publishes on and never fetch anything themselves.

use super::api::fetch_project;
use crate::shared::route_data::RouteDataStream;
use contracts::domain::a001_project::aggregate::Project;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

/// Бандл данных, разрешаемых маршрутом детальной формы проекта
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedProjectData {
    pub project: Option<Project>,
}

#[derive(Clone)]
pub struct ProjectResolver {
    project_id: String,
    stream: RouteDataStream<ResolvedProjectData>,
}

impl ProjectResolver {
    pub fn new(project_id: String) -> Self {
        Self {
            project_id,
            stream: RouteDataStream::new(),
        }
    }

    /// The stream view models subscribe to.
    pub fn data(&self) -> RouteDataStream<ResolvedProjectData> {
        self.stream.clone()
    }

    /// Fetch the project and emit the resolved bundle. Every call produces
    /// one more emission; a fetch failure terminates the stream with an
    /// error.
    pub fn resolve(&self) {
        let id = self.project_id.clone();
        let stream = self.stream.clone();
        spawn_local(async move {
            match fetch_project(&id).await {
                Ok(project) => stream.emit(ResolvedProjectData {
                    project: Some(project),
                }),
                Err(e) => stream.error(e),
            }
        });
    }

    /// Completes the stream when the route deactivates.
    pub fn dispose(&self) {
        self.stream.complete();
    }
}
