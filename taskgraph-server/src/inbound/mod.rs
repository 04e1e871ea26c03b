/*!
   Module `inbound` exposes the graph domain over HTTP.
*/

mod api;
mod handlers;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post, put};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::ports::GraphService;

pub const API_PREFIX: &str = "/neo/v1";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub addr: SocketAddr,
}

/// The global application state shared between all request handlers.
#[derive(Clone)]
pub(crate) struct AppState<GS: GraphService> {
    graph_service: Arc<GS>,
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the address specified in `config`.
    pub async fn new(
        graph_service: impl GraphService,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        let router = app(graph_service);

        let listener = TcpListener::bind(config.addr)
            .await
            .with_context(|| format!("failed to listen on {}", config.addr))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server until the process is killed.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!("listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

/// Builds the full router: API routes under [API_PREFIX], request tracing and shared state.
pub(crate) fn app<GS: GraphService>(graph_service: GS) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    let state = AppState {
        graph_service: Arc::new(graph_service),
    };

    Router::new()
        .nest(API_PREFIX, api_routes())
        .layer(trace_layer)
        .with_state(state)
}

fn api_routes<GS: GraphService>() -> Router<AppState<GS>> {
    use api::method_not_allowed;
    use handlers::*;

    Router::new()
        .route(
            "/persons",
            get(list_persons::<GS>)
                .post(create_person::<GS>)
                .fallback(method_not_allowed),
        )
        .route(
            "/persons/{name}",
            put(update_person::<GS>)
                .delete(delete_person::<GS>)
                .fallback(method_not_allowed),
        )
        .route(
            "/persons/{name}/tasks",
            get(tasks_for_person::<GS>).fallback(method_not_allowed),
        )
        .route(
            "/tasks",
            get(list_tasks::<GS>)
                .post(create_task::<GS>)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/{title}",
            put(update_task::<GS>)
                .delete(delete_task::<GS>)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/{title}/persons",
            get(persons_for_task::<GS>).fallback(method_not_allowed),
        )
        .route(
            "/assign",
            post(assign::<GS>).fallback(method_not_allowed),
        )
        .route(
            "/assigned-tasks/{title}",
            get(assigned_tasks::<GS>).fallback(method_not_allowed),
        )
        .route(
            "/assigned-persons/{name}",
            get(assigned_persons::<GS>).fallback(method_not_allowed),
        )
}
