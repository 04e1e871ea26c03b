//! In-memory [GraphRepository] used by tests.
//!
//! Mirrors the graph semantics the Neo4j store provides: creates never deduplicate, assignment
//! edges are merged per (person, task) pair, deletes detach edges, and updates of a missing key
//! are silent no-ops.

use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::RwLock;

use crate::domain::{
    models::{AssignRequest, GraphError, Person, Task, UpdatePersonRequest, UpdateTaskRequest},
    ports::GraphRepository,
};

type NodeId = u64;

#[derive(Debug, Default)]
struct GraphState {
    next_id: NodeId,
    persons: Vec<(NodeId, Person)>,
    tasks: Vec<(NodeId, Task)>,
    // (person, task)
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphState {
    fn allocate(&mut self) -> NodeId {
        self.next_id += 1;
        self.next_id
    }

    fn person_ids(&self, name: &str) -> Vec<NodeId> {
        self.persons
            .iter()
            .filter(|(_, p)| p.name == name)
            .map(|(id, _)| *id)
            .collect()
    }

    fn task_ids(&self, title: &str) -> Vec<NodeId> {
        self.tasks
            .iter()
            .filter(|(_, t)| t.title == title)
            .map(|(id, _)| *id)
            .collect()
    }

    fn person(&self, id: NodeId) -> Option<&Person> {
        self.persons.iter().find(|(i, _)| *i == id).map(|(_, p)| p)
    }

    fn task(&self, id: NodeId) -> Option<&Task> {
        self.tasks.iter().find(|(i, _)| *i == id).map(|(_, t)| t)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<RwLock<GraphState>>,
    failing: bool,
}

impl InMemoryRepository {
    /// A repository on which every operation fails, as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), GraphError> {
        if self.failing {
            return Err(anyhow!("graph store unavailable").into());
        }
        Ok(())
    }
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

impl GraphRepository for InMemoryRepository {
    async fn create_person(&self, person: &Person) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        let id = state.allocate();
        state.persons.push((id, person.clone()));
        Ok(())
    }

    async fn list_persons(&self) -> Result<Vec<Person>, GraphError> {
        self.check()?;
        let state = self.state.read().await;
        Ok(state.persons.iter().map(|(_, p)| p.clone()).collect())
    }

    async fn update_person(&self, req: &UpdatePersonRequest) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        for (_, person) in state.persons.iter_mut() {
            if person.name == req.old_name() {
                person.name = req.new_name().to_string();
            }
        }
        Ok(())
    }

    async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        let ids = state.person_ids(name);
        state.persons.retain(|(id, _)| !ids.contains(id));
        state.edges.retain(|(person, _)| !ids.contains(person));
        Ok(())
    }

    async fn create_task(&self, task: &Task) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        let id = state.allocate();
        state.tasks.push((id, task.clone()));
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, GraphError> {
        self.check()?;
        let state = self.state.read().await;
        Ok(state.tasks.iter().map(|(_, t)| t.clone()).collect())
    }

    async fn update_task(&self, req: &UpdateTaskRequest) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        for (_, task) in state.tasks.iter_mut() {
            if task.title == req.old_title() {
                *task = req.task().clone();
            }
        }
        Ok(())
    }

    async fn delete_task(&self, title: &str) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        let ids = state.task_ids(title);
        state.tasks.retain(|(id, _)| !ids.contains(id));
        state.edges.retain(|(_, task)| !ids.contains(task));
        Ok(())
    }

    async fn assign(&self, req: &AssignRequest) -> Result<(), GraphError> {
        self.check()?;
        let mut state = self.state.write().await;
        let persons = state.person_ids(req.name());
        let tasks = state.task_ids(req.title());
        for person in &persons {
            for task in &tasks {
                let edge = (*person, *task);
                if !state.edges.contains(&edge) {
                    state.edges.push(edge);
                }
            }
        }
        Ok(())
    }

    async fn tasks_for_person(&self, name: &str) -> Result<Vec<Task>, GraphError> {
        self.check()?;
        let state = self.state.read().await;
        let persons = state.person_ids(name);
        Ok(state
            .edges
            .iter()
            .filter(|(person, _)| persons.contains(person))
            .filter_map(|(_, task)| state.task(*task).cloned())
            .collect())
    }

    async fn persons_for_task(&self, title: &str) -> Result<Vec<Person>, GraphError> {
        self.check()?;
        let state = self.state.read().await;
        let tasks = state.task_ids(title);
        Ok(state
            .edges
            .iter()
            .filter(|(_, task)| tasks.contains(task))
            .filter_map(|(person, _)| state.person(*person).cloned())
            .collect())
    }

    async fn assigned_tasks(&self, title: &str) -> Result<Vec<Task>, GraphError> {
        self.check()?;
        let state = self.state.read().await;
        let tasks: Vec<Task> = state
            .edges
            .iter()
            .filter_map(|(_, task)| state.task(*task))
            .filter(|task| task.title == title)
            .cloned()
            .collect();
        Ok(dedup(tasks))
    }

    async fn assigned_persons(&self, name: &str) -> Result<Vec<Person>, GraphError> {
        self.check()?;
        let state = self.state.read().await;
        let persons: Vec<Person> = state
            .edges
            .iter()
            .filter_map(|(person, _)| state.person(*person))
            .filter(|person| person.name == name)
            .cloned()
            .collect();
        Ok(dedup(persons))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assignment(name: &str, title: &str) -> AssignRequest {
        AssignRequest::from((name.to_string(), title.to_string()))
    }

    #[tokio::test]
    async fn test_delete_detaches_edges() {
        let repo = InMemoryRepository::default();
        repo.create_person(&Person::new("Alice")).await.unwrap();
        repo.create_task(&Task::new("Write spec", "draft")).await.unwrap();
        repo.assign(&assignment("Alice", "Write spec")).await.unwrap();

        repo.delete_person("Alice").await.unwrap();

        assert!(repo.list_persons().await.unwrap().is_empty());
        assert!(repo.persons_for_task("Write spec").await.unwrap().is_empty());
        assert!(repo.assigned_tasks("Write spec").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assign_without_matching_nodes_is_a_no_op() {
        let repo = InMemoryRepository::default();
        repo.create_person(&Person::new("Alice")).await.unwrap();

        repo.assign(&assignment("Alice", "Missing")).await.unwrap();

        assert!(repo.tasks_for_person("Alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assigned_tasks_are_distinct() {
        let repo = InMemoryRepository::default();
        repo.create_person(&Person::new("Alice")).await.unwrap();
        repo.create_person(&Person::new("Bob")).await.unwrap();
        repo.create_task(&Task::new("Write spec", "draft")).await.unwrap();
        for name in ["Alice", "Bob"] {
            repo.assign(&assignment(name, "Write spec")).await.unwrap();
        }

        let tasks = repo.assigned_tasks("Write spec").await.unwrap();
        assert_eq!(tasks, vec![Task::new("Write spec", "draft")]);

        let persons = repo.persons_for_task("Write spec").await.unwrap();
        assert_eq!(persons, vec![Person::new("Alice"), Person::new("Bob")]);
    }
}
