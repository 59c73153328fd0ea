use axum::{body::Body, response::Response};
use http::{
    HeaderValue, StatusCode,
    header::{CACHE_CONTROL, CONTENT_TYPE, RETRY_AFTER},
};

use crate::guard_policy::{
    guard_policy::{GuardPolicy, INTERCEPTED_MARKER, PROXY_ACTIVE_MARKER, X_WORKER_STATUS},
    verdict::Verdict,
};

impl GuardPolicy {
    /// Classifies an origin response and produces what the client receives.
    ///
    /// A tunnel failure drops the origin response, body included, in favour of
    /// the synthetic fallback. Everything else keeps the origin's status,
    /// headers and body stream; only the marker header may be added.
    pub fn apply(&self, response: Response) -> (Verdict, Response) {
        let verdict = self.classify(response.status(), response.headers());

        let response = match verdict {
            Verdict::TunnelFailure => self.fallback_response(),
            Verdict::AlreadyIntercepted => response,
            Verdict::Healthy | Verdict::ApplicationError => self.annotate(response),
        };

        (verdict, response)
    }

    pub fn fallback_response(&self) -> Response {
        let mut response = Response::new(Body::from(self.fallback_body.clone()));
        *response.status_mut() = StatusCode::SERVICE_UNAVAILABLE;

        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert(RETRY_AFTER, HeaderValue::from(self.retry_after_secs));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        if self.status_marker {
            headers.insert(X_WORKER_STATUS, INTERCEPTED_MARKER);
        }

        response
    }

    /// Sets the marker, replacing only an existing marker.
    pub fn annotate(&self, mut response: Response) -> Response {
        if self.status_marker {
            response
                .headers_mut()
                .insert(X_WORKER_STATUS, PROXY_ACTIVE_MARKER);
        }

        response
    }
}
