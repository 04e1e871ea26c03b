/*
   Module `ports` specifies the API by which external modules interact with the graph domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use crate::domain::models::*;

/// `GraphService` is the public API for the person/task domain.
///
/// Every method maps onto exactly one [GraphRepository] call. Updates and deletes of a key that
/// does not exist are reported as success.
pub trait GraphService: Clone + Send + Sync + 'static {
    fn create_person(&self, person: &Person) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn list_persons(&self) -> impl Future<Output = Result<Vec<Person>, GraphError>> + Send;

    fn update_person(
        &self,
        req: &UpdatePersonRequest,
    ) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn delete_person(&self, name: &str) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn create_task(&self, task: &Task) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>, GraphError>> + Send;

    fn update_task(
        &self,
        req: &UpdateTaskRequest,
    ) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn delete_task(&self, title: &str) -> impl Future<Output = Result<(), GraphError>> + Send;

    /// Assign a [Person] to a [Task]. Assigning the same pair twice leaves a single edge.
    fn assign(&self, req: &AssignRequest) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn tasks_for_person(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Task>, GraphError>> + Send;

    fn persons_for_task(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<Person>, GraphError>> + Send;

    /// The tasks titled `title` that have at least one assignee.
    fn assigned_tasks(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<Task>, GraphError>> + Send;

    /// The persons named `name` that are assigned to at least one task.
    fn assigned_persons(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Person>, GraphError>> + Send;
}

/// `GraphRepository` represents the store holding persons, tasks and their assignments.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait GraphRepository: Send + Sync + Clone + 'static {
    /// Create a new person node. No duplicate check is made.
    fn create_person(&self, person: &Person) -> impl Future<Output = Result<(), GraphError>> + Send;

    /// All person nodes, in store order.
    fn list_persons(&self) -> impl Future<Output = Result<Vec<Person>, GraphError>> + Send;

    fn update_person(
        &self,
        req: &UpdatePersonRequest,
    ) -> impl Future<Output = Result<(), GraphError>> + Send;

    /// Delete every person named `name` together with its edges.
    fn delete_person(&self, name: &str) -> impl Future<Output = Result<(), GraphError>> + Send;

    /// Create a new task node. No duplicate check is made.
    fn create_task(&self, task: &Task) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>, GraphError>> + Send;

    fn update_task(
        &self,
        req: &UpdateTaskRequest,
    ) -> impl Future<Output = Result<(), GraphError>> + Send;

    /// Delete every task titled `title` together with its edges.
    fn delete_task(&self, title: &str) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn assign(&self, req: &AssignRequest) -> impl Future<Output = Result<(), GraphError>> + Send;

    fn tasks_for_person(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Task>, GraphError>> + Send;

    fn persons_for_task(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<Person>, GraphError>> + Send;

    fn assigned_tasks(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<Task>, GraphError>> + Send;

    fn assigned_persons(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Person>, GraphError>> + Send;
}
