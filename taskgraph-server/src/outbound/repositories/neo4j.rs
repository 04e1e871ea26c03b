use std::sync::Arc;

use anyhow::Context;
use neo4rs::{DeError, Graph, Query, Row, query};
use taskgraph_core::cypher::{self, param};
use thiserror::Error;

use crate::config::DbConfig;
use crate::domain::{
    models::{AssignRequest, GraphError, Person, Task, UpdatePersonRequest, UpdateTaskRequest},
    ports::GraphRepository,
};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Driver(#[from] neo4rs::Error),
    #[error("failed to decode row: {0}")]
    Decode(#[from] DeError),
}

/// [GraphRepository] backed by a Neo4j database.
///
/// Holds the driver's pooled connection handle. Each operation checks a connection out of the
/// pool, runs one statement inside one transaction and hands the connection back when the
/// transaction is dropped.
#[derive(Clone)]
pub struct Neo4jRepository {
    graph: Arc<Graph>,
}

impl Neo4jRepository {
    pub async fn connect(config: &DbConfig) -> Result<Self, RepositoryError> {
        let uri = config.uri();
        tracing::debug!("connecting to {}", uri);

        let graph = Graph::new(uri, config.user.clone(), config.password.clone()).await?;

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Create uniqueness constraints on person names and task titles.
    pub async fn ensure_unique_keys(&self) -> Result<(), RepositoryError> {
        self.write(query(cypher::UNIQUE_PERSON_NAME)).await?;
        self.write(query(cypher::UNIQUE_TASK_TITLE)).await
    }

    async fn write(&self, q: Query) -> Result<(), RepositoryError> {
        let mut txn = self.graph.start_txn().await?;
        txn.run(q).await?;
        txn.commit().await?;
        Ok(())
    }

    // Rows are collected in cursor order. A cell of the wrong type fails the whole read.
    async fn read<T>(
        &self,
        q: Query,
        decode: fn(&Row) -> Result<T, DeError>,
    ) -> Result<Vec<T>, RepositoryError> {
        let mut txn = self.graph.start_txn().await?;
        let mut stream = txn.execute(q).await?;

        let mut records = Vec::new();
        while let Some(row) = stream.next(txn.handle()).await? {
            records.push(decode(&row)?);
        }

        txn.commit().await?;
        Ok(records)
    }
}

fn person_from_row(row: &Row) -> Result<Person, DeError> {
    let name: String = row.get(param::NAME)?;
    Ok(Person { name })
}

fn task_from_row(row: &Row) -> Result<Task, DeError> {
    let title: String = row.get(param::TITLE)?;
    let description: String = row.get(param::DESCRIPTION)?;
    Ok(Task { title, description })
}

impl GraphRepository for Neo4jRepository {
    async fn create_person(&self, person: &Person) -> Result<(), GraphError> {
        let q = query(cypher::CREATE_PERSON).param(param::NAME, person.name.clone());

        self.write(q).await.context("failed to create person")?;
        Ok(())
    }

    async fn list_persons(&self) -> Result<Vec<Person>, GraphError> {
        let persons = self
            .read(query(cypher::LIST_PERSONS), person_from_row)
            .await
            .context("failed to get persons")?;
        Ok(persons)
    }

    async fn update_person(&self, req: &UpdatePersonRequest) -> Result<(), GraphError> {
        let q = query(cypher::UPDATE_PERSON)
            .param(param::OLD_NAME, req.old_name().to_string())
            .param(param::NEW_NAME, req.new_name().to_string());

        self.write(q).await.context("failed to update person")?;
        Ok(())
    }

    async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        let q = query(cypher::DELETE_PERSON).param(param::NAME, name.to_string());

        self.write(q).await.context("failed to delete person")?;
        Ok(())
    }

    async fn create_task(&self, task: &Task) -> Result<(), GraphError> {
        let q = query(cypher::CREATE_TASK)
            .param(param::TITLE, task.title.clone())
            .param(param::DESCRIPTION, task.description.clone());

        self.write(q).await.context("failed to create task")?;
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, GraphError> {
        let tasks = self
            .read(query(cypher::LIST_TASKS), task_from_row)
            .await
            .context("failed to get tasks")?;
        Ok(tasks)
    }

    async fn update_task(&self, req: &UpdateTaskRequest) -> Result<(), GraphError> {
        let task = req.task();
        let q = query(cypher::UPDATE_TASK)
            .param(param::OLD_TITLE, req.old_title().to_string())
            .param(param::NEW_TITLE, task.title.clone())
            .param(param::NEW_DESCRIPTION, task.description.clone());

        self.write(q).await.context("failed to update task")?;
        Ok(())
    }

    async fn delete_task(&self, title: &str) -> Result<(), GraphError> {
        let q = query(cypher::DELETE_TASK).param(param::TITLE, title.to_string());

        self.write(q).await.context("failed to delete task")?;
        Ok(())
    }

    async fn assign(&self, req: &AssignRequest) -> Result<(), GraphError> {
        let q = query(cypher::ASSIGN)
            .param(param::NAME, req.name().to_string())
            .param(param::TITLE, req.title().to_string());

        self.write(q)
            .await
            .context("failed to assign person to task")?;
        Ok(())
    }

    async fn tasks_for_person(&self, name: &str) -> Result<Vec<Task>, GraphError> {
        let q = query(cypher::TASKS_FOR_PERSON).param(param::NAME, name.to_string());

        let tasks = self
            .read(q, task_from_row)
            .await
            .with_context(|| format!("failed to get tasks for person '{}'", name))?;
        Ok(tasks)
    }

    async fn persons_for_task(&self, title: &str) -> Result<Vec<Person>, GraphError> {
        let q = query(cypher::PERSONS_FOR_TASK).param(param::TITLE, title.to_string());

        let persons = self
            .read(q, person_from_row)
            .await
            .with_context(|| format!("failed to get persons for task '{}'", title))?;
        Ok(persons)
    }

    async fn assigned_tasks(&self, title: &str) -> Result<Vec<Task>, GraphError> {
        let q = query(cypher::ASSIGNED_TASKS).param(param::TITLE, title.to_string());

        let tasks = self
            .read(q, task_from_row)
            .await
            .with_context(|| format!("failed to get assigned tasks titled '{}'", title))?;
        Ok(tasks)
    }

    async fn assigned_persons(&self, name: &str) -> Result<Vec<Person>, GraphError> {
        let q = query(cypher::ASSIGNED_PERSONS).param(param::NAME, name.to_string());

        let persons = self
            .read(q, person_from_row)
            .await
            .with_context(|| format!("failed to get assigned persons named '{}'", name))?;
        Ok(persons)
    }
}
