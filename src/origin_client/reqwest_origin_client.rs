use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, HttpBody};
use hyper::ext::ReasonPhrase;
use tracing::debug;

use crate::origin_client::{
    error::{Error, OriginClientErrorChecker},
    headers::strip_hop_by_hop,
    origin_client::OriginClient,
    request::OriginRequest,
    response::OriginResponse,
};

pub const DEFAULT_ORIGIN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ReqwestOriginClient {
    client: reqwest::Client,
    origin_url: String,
    timeout: Duration,
}

impl ReqwestOriginClient {
    /// `timeout` bounds connecting and waiting for response headers; the
    /// body stream that follows is not limited by it.
    pub fn new(origin_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self::with_client(client, origin_url, timeout))
    }

    pub fn with_client(
        client: reqwest::Client,
        origin_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            origin_url: origin_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn origin_url(&self) -> &str {
        &self.origin_url
    }
}

#[async_trait]
impl OriginClient for ReqwestOriginClient {
    async fn forward(&self, request: OriginRequest) -> Result<OriginResponse, Error> {
        let url = format!("{}{}", self.origin_url, request.path_and_query);
        debug!("Forwarding {} {}", request.method, url);

        let mut request_builder = self
            .client
            .request(request.method, &url)
            .headers(request.headers);

        if !request.body.is_end_stream() {
            request_builder =
                request_builder.body(reqwest::Body::wrap_stream(request.body.into_data_stream()));
        }

        let reqwest_response = tokio::time::timeout(self.timeout, request_builder.send())
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Error::from)?;

        debug!("Origin {} answered {}", url, reqwest_response.status());

        let status = reqwest_response.status();
        let reason = reqwest_response.extensions().get::<ReasonPhrase>().cloned();

        let mut headers = reqwest_response.headers().clone();
        strip_hop_by_hop(&mut headers);

        Ok(OriginResponse {
            status,
            reason,
            headers,
            body: Body::from_stream(reqwest_response.bytes_stream()),
        })
    }
}

impl OriginClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}
