//! In-memory project and work item storage shared by the handlers

use crate::models::{project::Project, work_item::WorkItem};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreInner {
    projects: HashMap<Uuid, Project>,
    work_items: HashMap<Uuid, WorkItem>,
}

/// Cheap-to-clone handle; every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_project(&self, project: Project) -> Project {
        let mut inner = self.inner.write().await;
        inner.projects.insert(project.id, project.clone());
        project
    }

    pub async fn find_project(&self, id: Uuid) -> Option<Project> {
        self.inner.read().await.projects.get(&id).cloned()
    }

    /// Apply `update` to a project under the write lock.
    pub async fn modify_project<R>(
        &self,
        id: Uuid,
        update: impl FnOnce(&mut Project) -> R,
    ) -> Option<(Project, R)> {
        let mut inner = self.inner.write().await;
        let project = inner.projects.get_mut(&id)?;
        let result = update(project);
        Some((project.clone(), result))
    }

    /// Number and insert a new work item for `project_id`.
    ///
    /// `build` receives the allocated item number. Returns `None` when the
    /// project does not exist.
    pub async fn create_work_item(
        &self,
        project_id: Uuid,
        build: impl FnOnce(i32) -> WorkItem,
    ) -> Option<(WorkItem, Project)> {
        let mut inner = self.inner.write().await;

        let project = inner.projects.get_mut(&project_id)?;
        project.last_item_number += 1;
        let project = project.clone();

        let work_item = build(project.last_item_number);
        inner.work_items.insert(work_item.id, work_item.clone());

        Some((work_item, project))
    }

    pub async fn find_work_item(&self, id: Uuid) -> Option<WorkItem> {
        self.inner.read().await.work_items.get(&id).cloned()
    }

    /// Apply `update` to a work item under the write lock.
    pub async fn modify_work_item<R>(
        &self,
        id: Uuid,
        update: impl FnOnce(&mut WorkItem) -> R,
    ) -> Option<(WorkItem, R)> {
        let mut inner = self.inner.write().await;
        let work_item = inner.work_items.get_mut(&id)?;
        let result = update(work_item);
        Some((work_item.clone(), result))
    }

    pub async fn project_count(&self) -> usize {
        self.inner.read().await.projects.len()
    }

    pub async fn work_item_count(&self) -> usize {
        self.inner.read().await.work_items.len()
    }
}
