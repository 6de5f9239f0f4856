use async_trait::async_trait;

use super::todo::{SectionId, Todo, TodoSection};
use crate::error::ApiError;

/// Remote data access for sections. Each call is a single round trip.
#[async_trait]
pub trait SectionsApi: Send + Sync + 'static {
    async fn list_sections(&self) -> Result<Vec<TodoSection>, ApiError>;
    async fn create_section(&self, section: &TodoSection) -> Result<TodoSection, ApiError>;
    async fn delete_section(&self, id: &SectionId) -> Result<(), ApiError>;
    async fn add_todo_to_section(&self, section_id: &SectionId, todo: &Todo) -> Result<TodoSection, ApiError>;
    async fn update_todo_in_section(&self, section_id: &SectionId, todo: &Todo) -> Result<TodoSection, ApiError>;
}
