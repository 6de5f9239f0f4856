//! In-memory section state driven by a pure reducer.
//!
//! `reduce` never mutates the state it is given; it always builds a new
//! collection. Actions that name an unknown id leave the state as it was.

use crate::domain::todo::{SectionId, Todo, TodoId, TodoSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionsAction {
    /// Replace the whole collection, e.g. after the initial load.
    SetSections(Vec<TodoSection>),
    AddSection(TodoSection),
    /// Prepend to the matching section.
    AddTodo { section_id: SectionId, todo: Todo },
    UpdateTodo { section_id: SectionId, todo: Todo },
    DeleteSection { id: SectionId },
    DeleteTodo { section_id: SectionId, todo_id: TodoId },
}

pub fn reduce(state: &[TodoSection], action: SectionsAction) -> Vec<TodoSection> {
    match action {
        SectionsAction::SetSections(sections) => sections,
        SectionsAction::AddSection(section) => {
            let mut next = state.to_vec();
            next.push(section);
            next
        }
        SectionsAction::AddTodo { section_id, todo } => map_section(state, &section_id, |section| {
            let mut todos = Vec::with_capacity(section.todos_list.len() + 1);
            todos.push(todo.clone());
            todos.extend(section.todos_list.iter().cloned());
            todos
        }),
        SectionsAction::UpdateTodo { section_id, todo } => map_section(state, &section_id, |section| {
            section
                .todos_list
                .iter()
                .map(|t| if t.id == todo.id { todo.clone() } else { t.clone() })
                .collect()
        }),
        SectionsAction::DeleteSection { id } => state.iter().filter(|s| s.id != id).cloned().collect(),
        SectionsAction::DeleteTodo { section_id, todo_id } => map_section(state, &section_id, |section| {
            section.todos_list.iter().filter(|t| t.id != todo_id).cloned().collect()
        }),
    }
}

fn map_section<F>(state: &[TodoSection], section_id: &SectionId, todos: F) -> Vec<TodoSection>
where
    F: Fn(&TodoSection) -> Vec<Todo>,
{
    state
        .iter()
        .map(|section| {
            if &section.id == section_id {
                TodoSection { todos_list: todos(section), ..section.clone() }
            } else {
                section.clone()
            }
        })
        .collect()
}

/// State container handed to the UI root when running without a backend.
#[derive(Debug, Clone, Default)]
pub struct Store {
    sections: Vec<TodoSection>,
}

impl Store {
    pub fn new(initial: Vec<TodoSection>) -> Self { Self { sections: initial } }

    pub fn sections(&self) -> &[TodoSection] { &self.sections }

    pub fn dispatch(&mut self, action: SectionsAction) {
        tracing::trace!(?action, "dispatch");
        self.sections = reduce(&self.sections, action);
    }
}
