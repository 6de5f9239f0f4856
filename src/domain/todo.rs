use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl Default for TodoId {
    fn default() -> Self { Self(Uuid::new_v4().to_string()) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl Default for SectionId {
    fn default() -> Self { Self(Uuid::new_v4().to_string()) }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

/// Urgency of a todo. Sent over the wire as `{ "id": 1, "value": "High" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "PriorityRepr", into = "PriorityWire")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// 1 for High through 3 for Low; also the `id` of the wire form.
    pub fn rank(self) -> u8 {
        match self { Priority::High => 1, Priority::Medium => 2, Priority::Low => 3 }
    }

    pub fn label(self) -> &'static str {
        match self { Priority::High => "High", Priority::Medium => "Medium", Priority::Low => "Low" }
    }

    pub fn next(self) -> Self {
        match self { Priority::High => Priority::Medium, Priority::Medium => Priority::Low, Priority::Low => Priority::High }
    }

    pub fn prev(self) -> Self {
        match self { Priority::High => Priority::Low, Priority::Medium => Priority::High, Priority::Low => Priority::Medium }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.label()) }
}

// Older payloads carry the bare label, one of them spelled "Hight".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum PriorityLabel {
    #[serde(alias = "Hight")]
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct PriorityWire {
    id: u8,
    value: PriorityLabel,
}

// The `id` of incoming payloads is not trusted; only the label counts.
// Anything unrecognised, `null` included, reads as Low.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Tagged { value: PriorityLabel },
    Bare(PriorityLabel),
    Unknown(serde::de::IgnoredAny),
}

impl From<PriorityRepr> for Priority {
    fn from(repr: PriorityRepr) -> Self {
        let label = match repr {
            PriorityRepr::Tagged { value } | PriorityRepr::Bare(value) => value,
            PriorityRepr::Unknown(_) => return Priority::default(),
        };
        match label { PriorityLabel::High => Priority::High, PriorityLabel::Medium => Priority::Medium, PriorityLabel::Low => Priority::Low }
    }
}

impl From<Priority> for PriorityWire {
    fn from(priority: Priority) -> Self {
        let value = match priority { Priority::High => PriorityLabel::High, Priority::Medium => PriorityLabel::Medium, Priority::Low => PriorityLabel::Low };
        PriorityWire { id: priority.rank(), value }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Unix seconds; 0 when the payload had none.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub deadline: i64,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoSection {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub todos_list: Vec<Todo>,
}

impl TodoSection {
    /// A fresh section with a client-generated id and no todos.
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: SectionId::default(), title: title.into(), todos_list: Vec::new() }
    }
}
