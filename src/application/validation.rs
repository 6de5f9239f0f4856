//! Form validation for the todo drawer and the add-section input.
//!
//! Validation is independent of the UI: it takes the raw field values and
//! returns either the cleaned values or every failing field with a message.

use crate::domain::{dates, todo::Priority};

pub const DESCRIPTION_MIN_CHARS: usize = 4;
pub const DESCRIPTION_MAX_CHARS: usize = 58;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Priority,
    Description,
    Deadline,
    Title,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Priority => "priority",
            Field::Description => "description",
            Field::Deadline => "deadline",
            Field::Title => "title",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }
}

/// Raw values of the todo drawer as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFormInput {
    pub name: String,
    pub priority: Option<Priority>,
    pub description: String,
    /// `YYYY-MM-DD`
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTodoForm {
    pub name: String,
    pub priority: Priority,
    pub description: String,
    /// Unix seconds, midnight UTC of the chosen day.
    pub deadline: i64,
}

pub fn validate_todo_form(input: &TodoFormInput) -> Result<ValidTodoForm, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.push(Field::Name, required(Field::Name));
    }

    if input.priority.is_none() {
        errors.push(Field::Priority, required(Field::Priority));
    }

    let chars = input.description.chars().count();
    if input.description.is_empty() {
        errors.push(Field::Description, required(Field::Description));
    } else if chars < DESCRIPTION_MIN_CHARS {
        errors.push(Field::Description, format!("description must be at least {DESCRIPTION_MIN_CHARS} characters"));
    } else if chars > DESCRIPTION_MAX_CHARS {
        errors.push(Field::Description, format!("description must be at most {DESCRIPTION_MAX_CHARS} characters"));
    }

    let deadline = if input.deadline.trim().is_empty() {
        errors.push(Field::Deadline, required(Field::Deadline));
        None
    } else {
        let parsed = dates::parse_date(&input.deadline).map(dates::date_to_timestamp);
        if parsed.is_none() {
            errors.push(Field::Deadline, "Invalid date format");
        }
        parsed
    };

    match (input.priority, deadline) {
        (Some(priority), Some(deadline)) if errors.is_empty() => Ok(ValidTodoForm {
            name: name.to_string(),
            priority,
            description: input.description.clone(),
            deadline,
        }),
        _ => Err(errors),
    }
}

/// Trimmed section title, or a `title` error when it is blank.
pub fn validate_section_form(title: &str) -> Result<String, ValidationErrors> {
    let title = title.trim();
    if title.is_empty() {
        let mut errors = ValidationErrors::default();
        errors.push(Field::Title, required(Field::Title));
        return Err(errors);
    }
    Ok(title.to_string())
}

fn required(field: Field) -> String { format!("{} is a required field", field.key()) }

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> TodoFormInput {
        TodoFormInput {
            name: "Buy milk".into(),
            priority: Some(Priority::High),
            description: "2% milk, one gallon".into(),
            deadline: "2024-05-01".into(),
        }
    }

    #[test]
    fn accepts_complete_form_and_converts_deadline() {
        let ok = validate_todo_form(&valid_input()).unwrap();
        assert_eq!(ok.name, "Buy milk");
        assert_eq!(ok.priority, Priority::High);
        assert_eq!(ok.deadline, 1_714_521_600);
    }

    #[test]
    fn reports_every_failing_field() {
        let errs = validate_todo_form(&TodoFormInput::default()).unwrap_err();
        assert_eq!(errs.message_for(Field::Name), Some("name is a required field"));
        assert_eq!(errs.message_for(Field::Priority), Some("priority is a required field"));
        assert_eq!(errs.message_for(Field::Description), Some("description is a required field"));
        assert_eq!(errs.message_for(Field::Deadline), Some("deadline is a required field"));
        assert_eq!(errs.0.len(), 4);
    }

    #[test]
    fn description_length_is_bounded() {
        let mut input = valid_input();
        input.description = "abc".into();
        let errs = validate_todo_form(&input).unwrap_err();
        assert_eq!(errs.message_for(Field::Description), Some("description must be at least 4 characters"));

        input.description = "x".repeat(59);
        let errs = validate_todo_form(&input).unwrap_err();
        assert_eq!(errs.message_for(Field::Description), Some("description must be at most 58 characters"));

        input.description = "x".repeat(58);
        assert!(validate_todo_form(&input).is_ok());
        input.description = "abcd".into();
        assert!(validate_todo_form(&input).is_ok());
    }

    #[test]
    fn whitespace_description_is_only_length_checked() {
        let mut input = valid_input();
        input.description = "    ".into();
        assert!(validate_todo_form(&input).is_ok());
        input.description = "  ".into();
        let errs = validate_todo_form(&input).unwrap_err();
        assert_eq!(errs.message_for(Field::Description), Some("description must be at least 4 characters"));
    }

    #[test]
    fn description_counts_characters_not_bytes() {
        let mut input = valid_input();
        input.description = "čšžř".into();
        assert!(validate_todo_form(&input).is_ok());
    }

    #[test]
    fn malformed_deadline_is_rejected() {
        let mut input = valid_input();
        input.deadline = "01/05/2024".into();
        let errs = validate_todo_form(&input).unwrap_err();
        assert_eq!(errs.message_for(Field::Deadline), Some("Invalid date format"));
        assert_eq!(errs.0.len(), 1);
    }

    #[test]
    fn section_title_must_not_be_blank() {
        assert_eq!(validate_section_form("  Groceries "), Ok("Groceries".to_string()));
        let errs = validate_section_form("   ").unwrap_err();
        assert_eq!(errs.message_for(Field::Title), Some("title is a required field"));
    }
}
