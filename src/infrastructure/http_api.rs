use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    domain::{
        repository::SectionsApi,
        todo::{SectionId, Todo, TodoSection},
    },
    error::ApiError,
};

/// `SectionsApi` over the hosted REST endpoints under `{base_url}/api/v1`.
#[derive(Clone)]
pub struct HttpSectionsApi {
    base_url: String,
    http: Client,
}

impl HttpSectionsApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn sections_url(&self) -> String { format!("{}/api/v1/sections", self.base_url) }

    fn section_url(&self, id: &SectionId) -> String { format!("{}/{}", self.sections_url(), id) }

    fn todos_url(&self, section_id: &SectionId) -> String { format!("{}/todos", self.section_url(section_id)) }
}

#[async_trait]
impl SectionsApi for HttpSectionsApi {
    async fn list_sections(&self) -> Result<Vec<TodoSection>, ApiError> {
        send_json(self.http.get(self.sections_url()))
            .await
            .map_err(|e| discard(e, ApiError::Fetch))
    }

    async fn create_section(&self, section: &TodoSection) -> Result<TodoSection, ApiError> {
        send_json(self.http.post(self.sections_url()).json(section))
            .await
            .map_err(|e| discard(e, ApiError::Create))
    }

    async fn delete_section(&self, id: &SectionId) -> Result<(), ApiError> {
        self.http
            .delete(self.section_url(id))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map(|_| ())
            .map_err(|e| discard(e, ApiError::Delete))
    }

    async fn add_todo_to_section(&self, section_id: &SectionId, todo: &Todo) -> Result<TodoSection, ApiError> {
        send_json(self.http.post(self.todos_url(section_id)).json(todo))
            .await
            .map_err(|e| discard(e, ApiError::AddTodo))
    }

    async fn update_todo_in_section(&self, section_id: &SectionId, todo: &Todo) -> Result<TodoSection, ApiError> {
        let url = format!("{}/{}", self.todos_url(section_id), todo.id);
        Ok(send_json(self.http.put(url).json(todo)).await?)
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, reqwest::Error> {
    request.send().await?.error_for_status()?.json().await
}

// Callers only ever see the fixed message; the cause goes to the log.
fn discard(cause: reqwest::Error, mapped: ApiError) -> ApiError {
    tracing::debug!(error = %cause, mapped = %mapped, "sections api call failed");
    mapped
}
