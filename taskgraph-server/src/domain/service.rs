/*!
   Module `service` provides the canonical implementation of the [GraphService] port.
*/

use super::{
    models::{AssignRequest, GraphError, Person, Task, UpdatePersonRequest, UpdateTaskRequest},
    ports::{GraphRepository, GraphService},
};

/// Canonical implementation of the [GraphService] port, through which the graph domain API is
/// consumed.
#[derive(Debug, Clone)]
pub struct Service<R>
where
    R: GraphRepository,
{
    repository: R,
}

impl<R> Service<R>
where
    R: GraphRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repository: repo }
    }
}

fn log_outcome<T>(result: &Result<T, GraphError>, done: &str, failed: &str) {
    match result {
        Ok(_) => tracing::info!("{}", done),
        Err(e) => tracing::error!("{}: {:#}", failed, e),
    }
}

impl<R> GraphService for Service<R>
where
    R: GraphRepository,
{
    async fn create_person(&self, person: &Person) -> Result<(), GraphError> {
        let result = self.repository.create_person(person).await;
        log_outcome(&result, "person created", "failed to create person");
        result
    }

    async fn list_persons(&self) -> Result<Vec<Person>, GraphError> {
        let result = self.repository.list_persons().await;
        if let Err(ref e) = result {
            tracing::error!("failed to get persons: {:#}", e);
        }
        result
    }

    async fn update_person(&self, req: &UpdatePersonRequest) -> Result<(), GraphError> {
        let result = self.repository.update_person(req).await;
        log_outcome(&result, "person updated", "failed to update person");
        result
    }

    async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        let result = self.repository.delete_person(name).await;
        log_outcome(&result, "person deleted", "failed to delete person");
        result
    }

    async fn create_task(&self, task: &Task) -> Result<(), GraphError> {
        let result = self.repository.create_task(task).await;
        log_outcome(&result, "task created", "failed to create task");
        result
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, GraphError> {
        let result = self.repository.list_tasks().await;
        if let Err(ref e) = result {
            tracing::error!("failed to get tasks: {:#}", e);
        }
        result
    }

    async fn update_task(&self, req: &UpdateTaskRequest) -> Result<(), GraphError> {
        let result = self.repository.update_task(req).await;
        log_outcome(&result, "task updated", "failed to update task");
        result
    }

    async fn delete_task(&self, title: &str) -> Result<(), GraphError> {
        let result = self.repository.delete_task(title).await;
        log_outcome(&result, "task deleted", "failed to delete task");
        result
    }

    async fn assign(&self, req: &AssignRequest) -> Result<(), GraphError> {
        let result = self.repository.assign(req).await;
        log_outcome(
            &result,
            "person assigned to task",
            "failed to assign person to task",
        );
        result
    }

    async fn tasks_for_person(&self, name: &str) -> Result<Vec<Task>, GraphError> {
        let result = self.repository.tasks_for_person(name).await;
        if let Err(ref e) = result {
            tracing::error!("failed to get tasks for person '{}': {:#}", name, e);
        }
        result
    }

    async fn persons_for_task(&self, title: &str) -> Result<Vec<Person>, GraphError> {
        let result = self.repository.persons_for_task(title).await;
        if let Err(ref e) = result {
            tracing::error!("failed to get persons for task '{}': {:#}", title, e);
        }
        result
    }

    async fn assigned_tasks(&self, title: &str) -> Result<Vec<Task>, GraphError> {
        let result = self.repository.assigned_tasks(title).await;
        if let Err(ref e) = result {
            tracing::error!("failed to get assigned tasks titled '{}': {:#}", title, e);
        }
        result
    }

    async fn assigned_persons(&self, name: &str) -> Result<Vec<Person>, GraphError> {
        let result = self.repository.assigned_persons(name).await;
        if let Err(ref e) = result {
            tracing::error!("failed to get assigned persons named '{}': {:#}", name, e);
        }
        result
    }
}
