#[cfg(test)]
mod tests {
    use super::super::section_service::{LocalSectionService, RemoteSectionService, SectionService};
    use super::super::store::{SectionsAction, Store};
    use crate::domain::{repository::SectionsApi, todo::{Priority, SectionId, Todo, TodoId, TodoSection}};
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct InMemoryApi {
        sections: Arc<Mutex<Vec<TodoSection>>>,
        calls: Arc<Mutex<Vec<&'static str>>>,
        fail_mutations: bool,
        fail_list_after: Option<usize>,
    }

    impl InMemoryApi {
        fn record(&self, call: &'static str) { self.calls.lock().unwrap().push(call); }
        fn count(&self, call: &str) -> usize { self.calls.lock().unwrap().iter().filter(|c| **c == call).count() }
    }

    #[async_trait]
    impl SectionsApi for InMemoryApi {
        async fn list_sections(&self) -> Result<Vec<TodoSection>, ApiError> {
            self.record("list");
            if self.fail_list_after.is_some_and(|n| self.count("list") > n) { return Err(ApiError::Fetch); }
            Ok(self.sections.lock().unwrap().clone())
        }
        async fn create_section(&self, section: &TodoSection) -> Result<TodoSection, ApiError> {
            self.record("create");
            if self.fail_mutations { return Err(ApiError::Create); }
            self.sections.lock().unwrap().push(section.clone());
            Ok(section.clone())
        }
        async fn delete_section(&self, id: &SectionId) -> Result<(), ApiError> {
            self.record("delete");
            if self.fail_mutations { return Err(ApiError::Delete); }
            self.sections.lock().unwrap().retain(|s| &s.id != id);
            Ok(())
        }
        async fn add_todo_to_section(&self, section_id: &SectionId, todo: &Todo) -> Result<TodoSection, ApiError> {
            self.record("add_todo");
            if self.fail_mutations { return Err(ApiError::AddTodo); }
            let mut sections = self.sections.lock().unwrap();
            let Some(section) = sections.iter_mut().find(|s| &s.id == section_id) else { return Err(ApiError::AddTodo) };
            section.todos_list.push(todo.clone());
            Ok(section.clone())
        }
        async fn update_todo_in_section(&self, section_id: &SectionId, todo: &Todo) -> Result<TodoSection, ApiError> {
            self.record("update_todo");
            let mut sections = self.sections.lock().unwrap();
            let Some(section) = sections.iter_mut().find(|s| &s.id == section_id) else { return Err(ApiError::Client("no section".into())) };
            for t in section.todos_list.iter_mut().filter(|t| t.id == todo.id) { *t = todo.clone(); }
            Ok(section.clone())
        }
    }

    fn todo(id: &str) -> Todo {
        Todo { id: TodoId(id.into()), name: "Buy milk".into(), description: "2% milk, one gallon".into(), is_done: false, priority: Priority::High, deadline: 1_700_000_000 }
    }

    #[tokio::test]
    async fn unit_sections_are_served_from_cache() {
        let api = InMemoryApi::default();
        let service = RemoteSectionService::new(api.clone());
        service.sections().await.unwrap();
        service.sections().await.unwrap();
        assert_eq!(api.count("list"), 1);
    }

    #[tokio::test]
    async fn unit_create_section_refetches_list() {
        let api = InMemoryApi::default();
        let service = RemoteSectionService::new(api.clone());
        assert!(service.sections().await.unwrap().is_empty());

        let sections = service.create_section(TodoSection::new("Groceries")).await.unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Groceries");
        assert!(sections[0].todos_list.is_empty());
        assert_eq!(api.count("create"), 1);
        assert_eq!(api.count("list"), 2);
    }

    #[tokio::test]
    async fn unit_mutations_read_after_write() {
        let api = InMemoryApi::default();
        let service = RemoteSectionService::new(api.clone());
        let section = TodoSection::new("Home");
        let id = section.id.clone();
        service.create_section(section).await.unwrap();

        let sections = service.add_todo(&id, todo("t1")).await.unwrap();
        assert_eq!(sections[0].todos_list, vec![todo("t1")]);

        let sections = service.toggle_done(&id, &todo("t1")).await.unwrap();
        assert!(sections[0].todos_list[0].is_done);
        assert_eq!(api.count("update_todo"), 1);
        assert_eq!(api.count("add_todo"), 1);

        let sections = service.delete_section(&id).await.unwrap();
        assert!(sections.is_empty());
        assert_eq!(api.count("list"), 4);
    }

    #[tokio::test]
    async fn unit_failed_mutation_keeps_cached_list() {
        let api = InMemoryApi { fail_mutations: true, ..Default::default() };
        let service = RemoteSectionService::new(api.clone());
        service.sections().await.unwrap();

        let err = service.create_section(TodoSection::new("X")).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create a new section");
        service.sections().await.unwrap();
        assert_eq!(api.count("list"), 1);
    }

    #[tokio::test]
    async fn unit_failed_refetch_is_not_reported_as_failed_mutation() {
        let api = InMemoryApi { fail_list_after: Some(1), ..Default::default() };
        let service = RemoteSectionService::new(api.clone());
        service.sections().await.unwrap();

        let err = service.create_section(TodoSection::new("Groceries")).await.unwrap_err();
        assert!(matches!(err, ApiError::Refetch));
        assert_eq!(err.to_string(), "Changes saved, but failed to refresh the sections");
        assert_eq!(api.sections.lock().unwrap().len(), 1);

        let err = service.refresh().await.unwrap_err();
        assert!(matches!(err, ApiError::Fetch));
    }

    #[tokio::test]
    async fn unit_local_service_goes_through_reducer() {
        let section = TodoSection::new("Work");
        let id = section.id.clone();
        let mut store = Store::default();
        store.dispatch(SectionsAction::SetSections(vec![section]));
        let service = LocalSectionService::new(store);

        service.add_todo(&id, todo("a")).await.unwrap();
        let sections = service.add_todo(&id, todo("b")).await.unwrap();
        assert_eq!(sections[0].todos_list.iter().map(|t| t.id.0.as_str()).collect::<Vec<_>>(), ["b", "a"]);

        let sections = service.toggle_done(&id, &todo("a")).await.unwrap();
        assert!(sections[0].todos_list[1].is_done);

        let sections = service.delete_todo(&id, &TodoId("b".into()));
        assert_eq!(sections[0].todos_list.len(), 1);

        let sections = service.delete_section(&id).await.unwrap();
        assert!(sections.is_empty());
    }
}
