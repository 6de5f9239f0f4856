use std::collections::HashMap;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use super::{
    drawer::{DrawerOutcome, TodoDrawer, TodoSubmission},
    section_input::SectionInput,
};
use crate::application::{
    section_service::SectionService,
    view::{visible_todos, ViewOptions},
};
use crate::domain::todo::{SectionId, Todo, TodoSection};
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

/// Root view state: the loaded sections plus everything the user has open.
pub struct App<S: SectionService> {
    service: S,
    pub sections: Vec<TodoSection>,
    pub load_state: LoadState,
    pub selected_section: usize,
    pub selected_todo: usize,
    pub views: HashMap<SectionId, ViewOptions>,
    pub drawer: TodoDrawer,
    pub section_input: SectionInput,
    pub status: Option<String>,
    should_quit: bool,
}

impl<S: SectionService> App<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            sections: Vec::new(),
            load_state: LoadState::Loading,
            selected_section: 0,
            selected_todo: 0,
            views: HashMap::new(),
            drawer: TodoDrawer::default(),
            section_input: SectionInput::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn service(&self) -> &S { &self.service }

    pub fn should_quit(&self) -> bool { self.should_quit }

    /// Initial load. A failure here replaces the whole view with the error.
    pub async fn load(&mut self) {
        self.load_state = LoadState::Loading;
        match self.service.sections().await {
            Ok(sections) => {
                tracing::info!(count = sections.len(), "sections loaded");
                self.set_sections(sections);
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "initial load failed");
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn view_options(&self, id: &SectionId) -> ViewOptions {
        self.views.get(id).copied().unwrap_or_default()
    }

    pub fn current_section(&self) -> Option<&TodoSection> { self.sections.get(self.selected_section) }

    pub fn visible<'a>(&self, section: &'a TodoSection) -> Vec<&'a Todo> {
        visible_todos(&section.todos_list, &self.view_options(&section.id))
    }

    pub fn current_todo(&self) -> Option<&Todo> {
        let section = self.current_section()?;
        self.visible(section).get(self.selected_todo).copied()
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if self.drawer.is_open() {
            if let DrawerOutcome::Submitted(submission) = self.drawer.handle_key(key) {
                self.submit_todo(submission).await;
            }
            return;
        }
        if self.section_input.focused {
            if let Some(section) = self.section_input.handle_key(key) {
                let result = self.service.create_section(section).await;
                self.apply(result);
            }
            return;
        }
        if self.load_state != LoadState::Ready {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.load().await,
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.select_section(self.selected_section.saturating_sub(1)),
            KeyCode::Right | KeyCode::Char('l') => self.select_section(self.selected_section + 1),
            KeyCode::Up | KeyCode::Char('k') => self.selected_todo = self.selected_todo.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_todo += 1;
                self.clamp_selection();
            }
            KeyCode::Char(' ') => {
                if let Some((section_id, todo)) = self.selected_pair() {
                    let result = self.service.toggle_done(&section_id, &todo).await;
                    self.apply(result);
                }
            }
            KeyCode::Char('e') => {
                if let Some((section_id, todo)) = self.selected_pair() {
                    self.drawer.open_edit(section_id, &todo);
                }
            }
            KeyCode::Char('a') => {
                if let Some(section_id) = self.current_section().map(|s| s.id.clone()) {
                    self.drawer.open_new(section_id, Utc::now().date_naive());
                }
            }
            KeyCode::Char('D') => {
                if let Some(id) = self.current_section().map(|s| s.id.clone()) {
                    let result = self.service.delete_section(&id).await;
                    if result.is_ok() {
                        self.views.remove(&id);
                    }
                    self.apply(result);
                }
            }
            KeyCode::Char('f') => self.update_view(|v| v.show_filters = !v.show_filters),
            KeyCode::Char('s') => self.update_view(|v| if v.show_filters { v.sort = v.sort.next() }),
            KeyCode::Char('p') => self.update_view(|v| if v.show_filters { v.cycle_filter() }),
            KeyCode::Char('n') => self.section_input.focus(),
            KeyCode::Char('r') => {
                let result = self.service.refresh().await;
                self.apply(result);
            }
            _ => {}
        }
    }

    fn selected_pair(&self) -> Option<(SectionId, Todo)> {
        Some((self.current_section()?.id.clone(), self.current_todo()?.clone()))
    }

    async fn submit_todo(&mut self, submission: TodoSubmission) {
        let result = match submission {
            TodoSubmission::Add { section_id, todo } => self.service.add_todo(&section_id, todo).await,
            TodoSubmission::Update { section_id, todo } => self.service.update_todo(&section_id, todo).await,
        };
        self.apply(result);
    }

    // Mutation failures are already logged by the service; the list stays as it was.
    fn apply(&mut self, result: Result<Vec<TodoSection>, ApiError>) {
        match result {
            Ok(sections) => {
                self.status = None;
                self.set_sections(sections);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn set_sections(&mut self, sections: Vec<TodoSection>) {
        self.sections = sections;
        self.clamp_selection();
    }

    fn select_section(&mut self, index: usize) {
        if index < self.sections.len() && index != self.selected_section {
            self.selected_section = index;
            self.selected_todo = 0;
        }
    }

    fn update_view(&mut self, change: impl FnOnce(&mut ViewOptions)) {
        let Some(id) = self.current_section().map(|s| s.id.clone()) else { return };
        change(self.views.entry(id).or_default());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.selected_section >= self.sections.len() {
            self.selected_section = self.sections.len().saturating_sub(1);
        }
        let visible = self.current_section().map(|s| self.visible(s).len()).unwrap_or(0);
        if self.selected_todo >= visible {
            self.selected_todo = visible.saturating_sub(1);
        }
    }
}
