use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stored post: store-assigned id, unique title, and the remaining fields
/// (`body`, `category`, `date`, ...) carried through untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Create/update input: the caller never chooses the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PostInput {
    pub title: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PostInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), fields: Map::new() }
    }

    /// Builder-style helper for attaching a payload field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Post {
    /// Assemble a stored record; keys that would shadow `id`/`title` are dropped
    /// so the assigned id always wins on the wire.
    pub(crate) fn from_input(id: u64, input: PostInput) -> Self {
        let PostInput { title, mut fields } = input;
        fields.remove("id");
        fields.remove("title");
        Self { id, title, fields }
    }
}
