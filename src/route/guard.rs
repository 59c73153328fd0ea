use axum::body::Body;
use axum::response::Response;
use axum::{extract::State, http::Request};
use tracing::{error, info, warn};

use crate::ServerState;
use crate::origin_client::{error::Error, request::OriginRequest};
use crate::request_id::request_id_of;

/// Forwards any request to the origin and swaps dead-tunnel answers for the
/// fallback. Transport failures propagate as gateway errors.
pub async fn guard(
    State(state): State<ServerState>,
    request: Request<Body>,
) -> Result<Response, Error> {
    let request_id = request_id_of(&request);

    let origin_response = state
        .client
        .forward(OriginRequest::from(request))
        .await
        .inspect_err(|err| error!("Forwarding request {request_id} failed: {err}"))?;

    let origin_status = origin_response.status;
    let (verdict, response) = state.policy.apply(origin_response.into());

    if verdict.is_tunnel_failure() {
        warn!(
            request_id = %request_id,
            origin_status = %origin_status,
            "Origin unreachable through the tunnel, answering with fallback"
        );
    } else {
        info!(
            request_id = %request_id,
            origin_status = %origin_status,
            verdict = %verdict,
            "Origin response passed through"
        );
    }

    Ok(response)
}
