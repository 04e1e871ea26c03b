use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record that can be projected onto a JSON object for a response body.
pub trait Model {
    fn to_map(&self) -> Map<String, Value>;
}

/// A person node. `name` is the key every query matches on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Person {
    #[serde(alias = "Name")]
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { name: name.into() }
    }
}

impl Model for Person {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map
    }
}

/// A task node, keyed by `title`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Description")]
    pub description: String,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Model for Task {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("title".to_string(), Value::String(self.title.clone()));
        map.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        map
    }
}

// Keeps the input order. An empty slice gives an empty list, which
// encodes as `[]` rather than `null`.
pub fn to_map_list<M: Model>(models: &[M]) -> Vec<Map<String, Value>> {
    models.iter().map(Model::to_map).collect()
}
