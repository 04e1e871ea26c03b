use super::AppState;
use super::api::{ApiError, ApiSuccess, JsonBody, OptionalJsonBody};
use crate::domain::models::{AssignRequest, Person, Task, UpdatePersonRequest, UpdateTaskRequest};
use crate::domain::ports::GraphService;

use taskgraph_core::to_map_list;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The response body of every list endpoint: each record's field map, in store order.
pub type ListResponseData = Vec<Map<String, Value>>;

/// The body of an assignment request. Extra fields, such as a task description, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignHttpRequestBody {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Title")]
    title: String,
}

impl AssignHttpRequestBody {
    fn into_domain(self) -> AssignRequest {
        AssignRequest::from((self.name, self.title))
    }
}

/// List every [Person].
///
/// # Responses
///
/// - 200 OK: a JSON array of `{name}` objects, possibly empty.
/// - 500 Internal Server Error: the store could not be read.
pub(super) async fn list_persons<GS: GraphService>(
    State(state): State<AppState<GS>>,
) -> Result<ApiSuccess<ListResponseData>, ApiError> {
    state
        .graph_service
        .list_persons()
        .await
        .map_err(|_| ApiError::internal("Failed to get persons"))
        .map(|ref persons| ApiSuccess::new(StatusCode::OK, to_map_list(persons)))
}

pub(super) async fn create_person<GS: GraphService>(
    State(state): State<AppState<GS>>,
    JsonBody(person): JsonBody<Person>,
) -> Result<StatusCode, ApiError> {
    state
        .graph_service
        .create_person(&person)
        .await
        .map_err(|_| ApiError::internal("Failed to create person"))
        .map(|_| StatusCode::OK)
}

/// Rename the persons called `name` to the name in the body.
///
/// Succeeds even when no person matched.
pub(super) async fn update_person<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(name): Path<String>,
    JsonBody(person): JsonBody<Person>,
) -> Result<StatusCode, ApiError> {
    let req = UpdatePersonRequest::from((name, person));
    state
        .graph_service
        .update_person(&req)
        .await
        .map_err(|_| ApiError::internal("Failed to update person"))
        .map(|_| StatusCode::OK)
}

pub(super) async fn delete_person<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .graph_service
        .delete_person(&name)
        .await
        .map_err(|_| ApiError::internal("Failed to delete person"))
        .map(|_| StatusCode::OK)
}

/// List every [Task].
///
/// # Responses
///
/// - 200 OK: a JSON array of `{title, description}` objects, possibly empty.
/// - 500 Internal Server Error: the store could not be read.
pub(super) async fn list_tasks<GS: GraphService>(
    State(state): State<AppState<GS>>,
) -> Result<ApiSuccess<ListResponseData>, ApiError> {
    state
        .graph_service
        .list_tasks()
        .await
        .map_err(|_| ApiError::internal("Failed to get tasks"))
        .map(|ref tasks| ApiSuccess::new(StatusCode::OK, to_map_list(tasks)))
}

pub(super) async fn create_task<GS: GraphService>(
    State(state): State<AppState<GS>>,
    JsonBody(task): JsonBody<Task>,
) -> Result<StatusCode, ApiError> {
    state
        .graph_service
        .create_task(&task)
        .await
        .map_err(|_| ApiError::internal("Failed to create task"))
        .map(|_| StatusCode::OK)
}

pub(super) async fn update_task<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(title): Path<String>,
    JsonBody(task): JsonBody<Task>,
) -> Result<StatusCode, ApiError> {
    let req = UpdateTaskRequest::from((title, task));
    state
        .graph_service
        .update_task(&req)
        .await
        .map_err(|_| ApiError::internal("Failed to update task"))
        .map(|_| StatusCode::OK)
}

/// Delete the tasks titled `title`.
///
/// A body is accepted for compatibility with older clients, but the path decides which task
/// goes. A body that is present must still be a valid task.
pub(super) async fn delete_task<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(title): Path<String>,
    OptionalJsonBody(body): OptionalJsonBody<Task>,
) -> Result<StatusCode, ApiError> {
    if let Some(task) = body.filter(|task| task.title != title) {
        tracing::debug!(
            "ignoring body title '{}' in favour of path title '{}'",
            task.title,
            title
        );
    }

    state
        .graph_service
        .delete_task(&title)
        .await
        .map_err(|_| ApiError::internal("Failed to delete task"))
        .map(|_| StatusCode::OK)
}

pub(super) async fn assign<GS: GraphService>(
    State(state): State<AppState<GS>>,
    JsonBody(body): JsonBody<AssignHttpRequestBody>,
) -> Result<StatusCode, ApiError> {
    let req = body.into_domain();
    state
        .graph_service
        .assign(&req)
        .await
        .map_err(|_| ApiError::internal("Failed to assign person to task"))
        .map(|_| StatusCode::OK)
}

/// The tasks titled `title` that somebody is assigned to.
pub(super) async fn assigned_tasks<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(title): Path<String>,
) -> Result<ApiSuccess<ListResponseData>, ApiError> {
    state
        .graph_service
        .assigned_tasks(&title)
        .await
        .map_err(|_| ApiError::internal("Failed to get tasks"))
        .map(|ref tasks| ApiSuccess::new(StatusCode::OK, to_map_list(tasks)))
}

/// The persons named `name` that are assigned to some task.
pub(super) async fn assigned_persons<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<ListResponseData>, ApiError> {
    state
        .graph_service
        .assigned_persons(&name)
        .await
        .map_err(|_| ApiError::internal("Failed to get persons"))
        .map(|ref persons| ApiSuccess::new(StatusCode::OK, to_map_list(persons)))
}

pub(super) async fn tasks_for_person<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<ListResponseData>, ApiError> {
    state
        .graph_service
        .tasks_for_person(&name)
        .await
        .map_err(|_| ApiError::internal("Failed to get tasks"))
        .map(|ref tasks| ApiSuccess::new(StatusCode::OK, to_map_list(tasks)))
}

pub(super) async fn persons_for_task<GS: GraphService>(
    State(state): State<AppState<GS>>,
    Path(title): Path<String>,
) -> Result<ApiSuccess<ListResponseData>, ApiError> {
    state
        .graph_service
        .persons_for_task(&title)
        .await
        .map_err(|_| ApiError::internal("Failed to get persons"))
        .map(|ref persons| ApiSuccess::new(StatusCode::OK, to_map_list(persons)))
}
