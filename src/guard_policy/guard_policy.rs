use http::{HeaderName, HeaderValue, StatusCode};

/// Statuses the edge emits when the tunnel or the connector behind it is gone.
/// 530 is the edge network's "origin DNS unreachable".
pub const TUNNEL_ERROR_CODES: [u16; 5] = [404, 502, 503, 504, 530];

pub const DEFAULT_APPLICATION_NAME: &str = "radicale";

pub const FALLBACK_BODY: &str = "Radicale Server Unreachable: Tunnel Connection Interrupted";

pub const DEFAULT_RETRY_AFTER_SECS: u64 = 300;

pub const X_WORKER_STATUS: HeaderName = HeaderName::from_static("x-worker-status");
pub const INTERCEPTED_MARKER: HeaderValue =
    HeaderValue::from_static("Intercepted-by-Radicale-Fixer");
pub const PROXY_ACTIVE_MARKER: HeaderValue = HeaderValue::from_static("Proxy-Active");

/// The interception table: which statuses look like a dead tunnel, how the
/// origin application identifies itself, and what to answer instead.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardPolicy {
    pub tunnel_error_codes: Vec<StatusCode>,
    /// Matched case-insensitively against the `server` header. Empty disables
    /// the `server` half of the signature.
    pub application_name: String,
    pub fallback_body: String,
    pub retry_after_secs: u64,
    /// Adds `X-Worker-Status` to both pass-through and fallback responses.
    pub status_marker: bool,
}

impl GuardPolicy {
    pub fn is_tunnel_error(&self, status: StatusCode) -> bool {
        self.tunnel_error_codes.contains(&status)
    }
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            tunnel_error_codes: TUNNEL_ERROR_CODES
                .iter()
                .filter_map(|code| StatusCode::from_u16(*code).ok())
                .collect(),
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            fallback_body: FALLBACK_BODY.to_string(),
            retry_after_secs: DEFAULT_RETRY_AFTER_SECS,
            status_marker: true,
        }
    }
}
