use crossterm::event::{KeyCode, KeyEvent};

use crate::application::validation::{validate_section_form, Field};
use crate::domain::todo::TodoSection;

/// Single-line input above the cards for adding a section.
#[derive(Debug, Clone, Default)]
pub struct SectionInput {
    pub value: String,
    pub focused: bool,
    pub error: Option<String>,
}

impl SectionInput {
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Returns a new section once a valid title is submitted with Enter.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<TodoSection> {
        match key.code {
            KeyCode::Esc => {
                self.focused = false;
                self.error = None;
            }
            KeyCode::Enter => return self.submit(),
            KeyCode::Backspace => { self.value.pop(); }
            KeyCode::Char(c) => self.value.push(c),
            _ => {}
        }
        None
    }

    pub fn submit(&mut self) -> Option<TodoSection> {
        match validate_section_form(&self.value) {
            Ok(title) => {
                self.value.clear();
                self.error = None;
                Some(TodoSection::new(title))
            }
            Err(errors) => {
                self.error = errors.message_for(Field::Title).map(str::to_string);
                None
            }
        }
    }
}
