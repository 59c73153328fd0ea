use axum::body::Body;
use http::{HeaderMap, Method, Request, header::HOST};

use crate::origin_client::headers::strip_hop_by_hop;

/// An inbound request re-targeted at the origin. The body is never read here.
#[derive(Debug)]
pub struct OriginRequest {
    pub method: Method,
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Body,
}

impl From<Request<Body>> for OriginRequest {
    fn from(request: Request<Body>) -> Self {
        let (parts, body) = request.into_parts();

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| String::from("/"));

        let mut headers = parts.headers;
        strip_hop_by_hop(&mut headers);
        headers.remove(HOST);

        OriginRequest {
            method: parts.method,
            path_and_query,
            headers,
            body,
        }
    }
}
