use http::{HeaderName, HeaderValue, Request};
use uuid::Uuid;

use tower_http::request_id::{MakeRequestId, RequestId};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

#[derive(Clone, Default)]
pub struct GuardRequestId {}

impl MakeRequestId for GuardRequestId {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        let request_id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;

        Some(RequestId::new(request_id))
    }
}

/// The correlation id assigned by `SetRequestIdLayer`, for logging.
pub fn request_id_of<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or(UNKNOWN_REQUEST_ID)
        .to_string()
}
