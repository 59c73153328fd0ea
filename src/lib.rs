pub mod cli_arguments;
pub mod guard_policy;
pub mod origin_client;
pub mod request_id;
pub mod route;

use crate::guard_policy::guard_policy::GuardPolicy;
use crate::origin_client::origin_client::OriginClient;
use crate::request_id::{GuardRequestId, UNKNOWN_REQUEST_ID, X_REQUEST_ID};
use crate::route::guard::guard;
use axum::Router;
use axum::extract::Request;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};

#[derive(Clone)]
pub struct ServerState {
    pub client: Arc<dyn OriginClient>,
    pub policy: Arc<GuardPolicy>,
}

/// Every path and method goes through the guard.
pub fn router(server_state: ServerState) -> Router {
    Router::new()
        .fallback(guard)
        .with_state(server_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or(UNKNOWN_REQUEST_ID);

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            GuardRequestId::default(),
        ))
}
