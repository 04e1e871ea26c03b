pub use taskgraph_core::{Person, Task};

use derive_more::From;
use thiserror::Error;

/// The fields required by the domain to rename a [Person].
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct UpdatePersonRequest {
    old_name: String,
    person: Person,
}

impl UpdatePersonRequest {
    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    pub fn new_name(&self) -> &str {
        &self.person.name
    }
}

/// The fields required by the domain to replace a [Task].
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct UpdateTaskRequest {
    old_title: String,
    task: Task,
}

impl UpdateTaskRequest {
    pub fn old_title(&self) -> &str {
        &self.old_title
    }

    pub fn task(&self) -> &Task {
        &self.task
    }
}

/// The fields required by the domain to assign a [Person] to a [Task].
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct AssignRequest {
    name: String,
    title: String,
}

impl AssignRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}
