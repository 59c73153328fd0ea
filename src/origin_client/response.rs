use axum::body::Body;
use http::{HeaderMap, StatusCode};
use hyper::ext::ReasonPhrase;

/// What the origin answered, with its body still unread. Carries no HTTP
/// version: the inbound connection answers in its own.
#[derive(Debug)]
pub struct OriginResponse {
    pub status: StatusCode,
    /// Only set when the origin sent a non-canonical status text.
    pub reason: Option<ReasonPhrase>,
    pub headers: HeaderMap,
    pub body: Body,
}

impl From<OriginResponse> for axum::response::Response {
    fn from(origin_response: OriginResponse) -> Self {
        let mut response = axum::response::Response::new(origin_response.body);
        *response.status_mut() = origin_response.status;
        *response.headers_mut() = origin_response.headers;
        if let Some(reason) = origin_response.reason {
            response.extensions_mut().insert(reason);
        }
        response
    }
}
