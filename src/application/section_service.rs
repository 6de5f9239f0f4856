use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    cache::{QueryCache, SECTIONS_KEY},
    store::{SectionsAction, Store},
};
use crate::{
    domain::{
        repository::SectionsApi,
        todo::{SectionId, Todo, TodoId, TodoSection},
    },
    error::ApiError,
};

/// Operations the UI performs on sections. Every call returns the section
/// list as it stands afterwards.
#[async_trait]
pub trait SectionService: Send + Sync + 'static {
    async fn sections(&self) -> Result<Vec<TodoSection>, ApiError>;
    async fn refresh(&self) -> Result<Vec<TodoSection>, ApiError>;
    async fn create_section(&self, section: TodoSection) -> Result<Vec<TodoSection>, ApiError>;
    async fn delete_section(&self, id: &SectionId) -> Result<Vec<TodoSection>, ApiError>;
    async fn add_todo(&self, section_id: &SectionId, todo: Todo) -> Result<Vec<TodoSection>, ApiError>;
    async fn update_todo(&self, section_id: &SectionId, todo: Todo) -> Result<Vec<TodoSection>, ApiError>;

    async fn toggle_done(&self, section_id: &SectionId, todo: &Todo) -> Result<Vec<TodoSection>, ApiError> {
        self.update_todo(section_id, Todo { is_done: !todo.is_done, ..todo.clone() }).await
    }
}

/// Sections backed by the remote API. Reads go through the query cache;
/// each mutation invalidates `"sections"` and re-fetches before returning.
pub struct RemoteSectionService<A: SectionsApi> {
    api: A,
    cache: QueryCache<Vec<TodoSection>>,
}

impl<A: SectionsApi> RemoteSectionService<A> {
    pub fn new(api: A) -> Self { Self { api, cache: QueryCache::new() } }

    async fn reload(&self) -> Result<Vec<TodoSection>, ApiError> {
        self.cache.invalidate(SECTIONS_KEY).await;
        self.sections().await
    }

    async fn read_after_write(&self) -> Result<Vec<TodoSection>, ApiError> {
        self.reload().await.map_err(|e| {
            tracing::warn!(error = %e, "change saved but refetching sections failed");
            ApiError::Refetch
        })
    }
}

#[async_trait]
impl<A: SectionsApi> SectionService for RemoteSectionService<A> {
    async fn sections(&self) -> Result<Vec<TodoSection>, ApiError> {
        self.cache.get_or_fetch(SECTIONS_KEY, || self.api.list_sections()).await
    }

    async fn refresh(&self) -> Result<Vec<TodoSection>, ApiError> { self.reload().await }

    async fn create_section(&self, section: TodoSection) -> Result<Vec<TodoSection>, ApiError> {
        let created = self.api.create_section(&section).await.inspect_err(|e| {
            tracing::error!(error = %e, title = %section.title, "create section failed");
        })?;
        tracing::info!(id = %created.id, title = %created.title, "section created");
        self.read_after_write().await
    }

    async fn delete_section(&self, id: &SectionId) -> Result<Vec<TodoSection>, ApiError> {
        self.api.delete_section(id).await.inspect_err(|e| {
            tracing::error!(error = %e, section = %id, "delete section failed");
        })?;
        tracing::info!(section = %id, "section deleted");
        self.read_after_write().await
    }

    async fn add_todo(&self, section_id: &SectionId, todo: Todo) -> Result<Vec<TodoSection>, ApiError> {
        self.api.add_todo_to_section(section_id, &todo).await.inspect_err(|e| {
            tracing::error!(error = %e, section = %section_id, "add todo failed");
        })?;
        tracing::info!(section = %section_id, todo = %todo.id, "todo added");
        self.read_after_write().await
    }

    async fn update_todo(&self, section_id: &SectionId, todo: Todo) -> Result<Vec<TodoSection>, ApiError> {
        self.api.update_todo_in_section(section_id, &todo).await.inspect_err(|e| {
            tracing::error!(error = %e, section = %section_id, todo = %todo.id, "update todo failed");
        })?;
        tracing::info!(section = %section_id, todo = %todo.id, done = todo.is_done, "todo updated");
        self.read_after_write().await
    }
}

/// Sections held only in memory, mutated through the reducer.
#[derive(Default)]
pub struct LocalSectionService {
    store: Mutex<Store>,
}

impl LocalSectionService {
    pub fn new(store: Store) -> Self { Self { store: Mutex::new(store) } }

    /// Not exposed by the remote API; only the in-memory store can drop a todo.
    pub fn delete_todo(&self, section_id: &SectionId, todo_id: &TodoId) -> Vec<TodoSection> {
        self.dispatch(SectionsAction::DeleteTodo { section_id: section_id.clone(), todo_id: todo_id.clone() })
    }

    fn dispatch(&self, action: SectionsAction) -> Vec<TodoSection> {
        let mut store = self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        store.dispatch(action);
        store.sections().to_vec()
    }

    fn snapshot(&self) -> Vec<TodoSection> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).sections().to_vec()
    }
}

#[async_trait]
impl SectionService for LocalSectionService {
    async fn sections(&self) -> Result<Vec<TodoSection>, ApiError> { Ok(self.snapshot()) }

    async fn refresh(&self) -> Result<Vec<TodoSection>, ApiError> { Ok(self.snapshot()) }

    async fn create_section(&self, section: TodoSection) -> Result<Vec<TodoSection>, ApiError> {
        Ok(self.dispatch(SectionsAction::AddSection(section)))
    }

    async fn delete_section(&self, id: &SectionId) -> Result<Vec<TodoSection>, ApiError> {
        Ok(self.dispatch(SectionsAction::DeleteSection { id: id.clone() }))
    }

    async fn add_todo(&self, section_id: &SectionId, todo: Todo) -> Result<Vec<TodoSection>, ApiError> {
        Ok(self.dispatch(SectionsAction::AddTodo { section_id: section_id.clone(), todo }))
    }

    async fn update_todo(&self, section_id: &SectionId, todo: Todo) -> Result<Vec<TodoSection>, ApiError> {
        Ok(self.dispatch(SectionsAction::UpdateTodo { section_id: section_id.clone(), todo }))
    }
}
