use async_trait::async_trait;

use crate::origin_client::{error::Error, request::OriginRequest, response::OriginResponse};

/// Forwards one request to the origin and resolves once response headers
/// are in. The response body is left to the caller to stream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OriginClient: Send + Sync {
    async fn forward(&self, request: OriginRequest) -> Result<OriginResponse, Error>;
}
