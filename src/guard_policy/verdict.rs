use std::fmt::{self, Display};

use http::{
    HeaderMap, StatusCode,
    header::{SERVER, WWW_AUTHENTICATE},
};

use crate::guard_policy::guard_policy::{GuardPolicy, INTERCEPTED_MARKER, X_WORKER_STATUS};

/// Why a response was, or was not, taken for a tunnel failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Status outside the tunnel error set.
    Healthy,
    /// Tunnel error status, but the origin application signed it.
    ApplicationError,
    /// Already a fallback produced by a guard.
    AlreadyIntercepted,
    TunnelFailure,
}

impl Verdict {
    pub fn is_tunnel_failure(&self) -> bool {
        matches!(self, Verdict::TunnelFailure)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Healthy => "healthy",
            Verdict::ApplicationError => "application-error",
            Verdict::AlreadyIntercepted => "already-intercepted",
            Verdict::TunnelFailure => "tunnel-failure",
        };
        write!(f, "{}", s)
    }
}

impl GuardPolicy {
    pub fn classify(&self, status: StatusCode, headers: &HeaderMap) -> Verdict {
        if !self.is_tunnel_error(status) {
            return Verdict::Healthy;
        }

        if self.has_application_signature(headers) {
            return Verdict::ApplicationError;
        }

        if headers
            .get_all(X_WORKER_STATUS)
            .iter()
            .any(|value| *value == INTERCEPTED_MARKER)
        {
            return Verdict::AlreadyIntercepted;
        }

        Verdict::TunnelFailure
    }

    /// `WWW-Authenticate` present, or a `server` header naming the application.
    pub fn has_application_signature(&self, headers: &HeaderMap) -> bool {
        if headers.contains_key(WWW_AUTHENTICATE) {
            return true;
        }

        if self.application_name.is_empty() {
            return false;
        }

        let needle = self.application_name.to_lowercase();

        headers.get_all(SERVER).iter().any(|value| {
            String::from_utf8_lossy(value.as_bytes())
                .to_lowercase()
                .contains(&needle)
        })
    }
}
