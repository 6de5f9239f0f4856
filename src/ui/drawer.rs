use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::application::validation::{validate_todo_form, Field, TodoFormInput, ValidationErrors};
use crate::domain::{
    dates,
    todo::{Priority, SectionId, Todo, TodoId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerField {
    #[default]
    Name,
    Priority,
    Description,
    Deadline,
}

impl DrawerField {
    pub const ALL: [DrawerField; 4] = [DrawerField::Name, DrawerField::Priority, DrawerField::Description, DrawerField::Deadline];

    pub fn label(self) -> &'static str {
        match self {
            DrawerField::Name => "Name",
            DrawerField::Priority => "Priority",
            DrawerField::Description => "Description",
            DrawerField::Deadline => "Deadline (YYYY-MM-DD)",
        }
    }

    pub fn validation_field(self) -> Field {
        match self {
            DrawerField::Name => Field::Name,
            DrawerField::Priority => Field::Priority,
            DrawerField::Description => Field::Description,
            DrawerField::Deadline => Field::Deadline,
        }
    }

    fn next(self) -> Self {
        match self {
            DrawerField::Name => DrawerField::Priority,
            DrawerField::Priority => DrawerField::Description,
            DrawerField::Description => DrawerField::Deadline,
            DrawerField::Deadline => DrawerField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            DrawerField::Name => DrawerField::Deadline,
            DrawerField::Priority => DrawerField::Name,
            DrawerField::Description => DrawerField::Priority,
            DrawerField::Deadline => DrawerField::Description,
        }
    }
}

/// What a successful drawer submit asks the caller to do. Exactly one per submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSubmission {
    Add { section_id: SectionId, todo: Todo },
    Update { section_id: SectionId, todo: Todo },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerOutcome {
    Pending,
    Cancelled,
    Submitted(TodoSubmission),
}

// The todo being edited; `None` while creating. `deadline` is kept as
// stored and only replaced when the date shown in the form changes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Editing {
    id: TodoId,
    is_done: bool,
    deadline: i64,
    shown_deadline: String,
}

/// Side panel for creating or editing a single todo.
#[derive(Debug, Clone, Default)]
pub struct TodoDrawer {
    open: bool,
    section_id: Option<SectionId>,
    editing: Option<Editing>,
    pub input: TodoFormInput,
    pub field: DrawerField,
    pub errors: ValidationErrors,
}

impl TodoDrawer {
    pub fn is_open(&self) -> bool { self.open }

    pub fn is_edit(&self) -> bool { self.editing.is_some() }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Update todo" } else { "Create a new todo" }
    }

    pub fn open_new(&mut self, section_id: SectionId, today: NaiveDate) {
        self.reset();
        self.open = true;
        self.section_id = Some(section_id);
        self.input.priority = Some(Priority::Low);
        self.input.deadline = today.format(dates::DATE_FORMAT).to_string();
    }

    pub fn open_edit(&mut self, section_id: SectionId, todo: &Todo) {
        self.reset();
        self.open = true;
        self.section_id = Some(section_id);
        let shown_deadline = dates::timestamp_to_date_string(Some(todo.deadline)).unwrap_or_default();
        self.input = TodoFormInput {
            name: todo.name.clone(),
            priority: Some(todo.priority),
            description: todo.description.clone(),
            deadline: shown_deadline.clone(),
        };
        self.editing = Some(Editing { id: todo.id.clone(), is_done: todo.is_done, deadline: todo.deadline, shown_deadline });
    }

    pub fn close(&mut self) { self.reset(); }

    fn reset(&mut self) { *self = Self::default(); }

    pub fn error_for(&self, field: DrawerField) -> Option<&str> {
        self.errors.message_for(field.validation_field())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DrawerOutcome {
        match key.code {
            KeyCode::Esc => {
                self.close();
                return DrawerOutcome::Cancelled;
            }
            KeyCode::Enter => {
                return match self.submit() {
                    Some(submission) => DrawerOutcome::Submitted(submission),
                    None => DrawerOutcome::Pending,
                };
            }
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Left if self.field == DrawerField::Priority => {
                self.input.priority = Some(self.input.priority.unwrap_or_default().prev());
            }
            KeyCode::Right if self.field == DrawerField::Priority => {
                self.input.priority = Some(self.input.priority.unwrap_or_default().next());
            }
            KeyCode::Backspace => { if let Some(text) = self.active_text() { text.pop(); } }
            KeyCode::Char(c) => { if let Some(text) = self.active_text() { text.push(c); } }
            _ => {}
        }
        DrawerOutcome::Pending
    }

    fn active_text(&mut self) -> Option<&mut String> {
        match self.field {
            DrawerField::Name => Some(&mut self.input.name),
            DrawerField::Description => Some(&mut self.input.description),
            DrawerField::Deadline => Some(&mut self.input.deadline),
            DrawerField::Priority => None,
        }
    }

    /// Validates the form. On success closes and resets the drawer and
    /// returns the request to send; on failure keeps it open with errors.
    pub fn submit(&mut self) -> Option<TodoSubmission> {
        let section_id = self.section_id.clone()?;
        let valid = match validate_todo_form(&self.input) {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(?errors, "todo form rejected");
                self.errors = errors;
                return None;
            }
        };
        let (id, is_done, deadline) = match &self.editing {
            Some(editing) if editing.shown_deadline == self.input.deadline => (editing.id.clone(), editing.is_done, editing.deadline),
            Some(editing) => (editing.id.clone(), editing.is_done, valid.deadline),
            None => (TodoId::default(), false, valid.deadline),
        };
        let todo = Todo { id, name: valid.name, description: valid.description, is_done, priority: valid.priority, deadline };
        let submission = if self.is_edit() {
            TodoSubmission::Update { section_id, todo }
        } else {
            TodoSubmission::Add { section_id, todo }
        };
        self.close();
        Some(submission)
    }
}
