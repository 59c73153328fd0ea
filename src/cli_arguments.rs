use std::time::Duration;

use clap::Parser;
use http::StatusCode;

use crate::guard_policy::guard_policy::{
    DEFAULT_APPLICATION_NAME, DEFAULT_RETRY_AFTER_SECS, FALLBACK_BODY, GuardPolicy,
};
use crate::origin_client::reqwest_origin_client::DEFAULT_ORIGIN_TIMEOUT;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long)]
    pub port: u16,

    /// Base URL of the origin; the inbound path and query are appended.
    #[arg(short, long)]
    pub origin_url: String,

    /// Name looked for in the origin's `server` header.
    #[arg(short, long, default_value = DEFAULT_APPLICATION_NAME)]
    pub application_name: String,

    #[arg(
        short = 'c',
        long,
        value_delimiter = ',',
        default_value = "404,502,503,504,530",
        value_parser = parse_status_code
    )]
    pub tunnel_error_codes: Vec<StatusCode>,

    #[arg(short, long, default_value_t = DEFAULT_RETRY_AFTER_SECS)]
    pub retry_after: u64,

    /// Seconds allowed until the origin's response headers arrive.
    #[arg(long, default_value_t = DEFAULT_ORIGIN_TIMEOUT.as_secs())]
    pub origin_timeout_secs: u64,

    /// Do not add the X-Worker-Status header.
    #[arg(long)]
    pub no_status_header: bool,
}

impl CliArguments {
    pub fn guard_policy(&self) -> GuardPolicy {
        GuardPolicy {
            tunnel_error_codes: self.tunnel_error_codes.clone(),
            application_name: self.application_name.clone(),
            fallback_body: FALLBACK_BODY.to_string(),
            retry_after_secs: self.retry_after,
            status_marker: !self.no_status_header,
        }
    }

    pub fn origin_timeout(&self) -> Duration {
        Duration::from_secs(self.origin_timeout_secs)
    }
}

fn parse_status_code(value: &str) -> Result<StatusCode, String> {
    let code: u16 = value
        .trim()
        .parse()
        .map_err(|_| format!("{value} is not a status code"))?;

    StatusCode::from_u16(code).map_err(|e| format!("{value}: {e}"))
}
