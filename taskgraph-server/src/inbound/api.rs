use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub(super) const INVALID_METHOD: &str = "Invalid request method";
pub(super) const UNREADABLE_BODY: &str = "Unable to read request body";
pub(super) const MALFORMED_JSON: &str = "Unable to parse JSON";

/// A successful response carrying a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

// An encoding failure turns into a 500 inside `Json`.
impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Errors reported to clients as a status code and a plain-text message. Internal error detail
/// is logged by the domain service and never sent back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", INVALID_METHOD)]
    MethodNotAllowed,
    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn internal(message: &str) -> Self {
        ApiError::InternalServerError(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

/// Method-router fallback for requests whose method the route does not declare.
pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// A request body decoded as JSON into `T`.
///
/// Unlike [axum::Json] this ignores the `Content-Type` header, and every failure is a
/// `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody<T>(pub T);

/// Like [JsonBody], but an empty body decodes to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalJsonBody<T>(pub Option<T>);

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, ApiError>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state).await.map_err(|e| {
        tracing::debug!("failed to read request body: {}", e);
        ApiError::BadRequest(UNREADABLE_BODY.to_string())
    })
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!("failed to parse request body: {}", e);
        ApiError::BadRequest(MALFORMED_JSON.to_string())
    })
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        parse_body(&bytes).map(JsonBody)
    }
}

impl<T, S> FromRequest<S> for OptionalJsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJsonBody(None));
        }
        parse_body(&bytes).map(|body| OptionalJsonBody(Some(body)))
    }
}
