use std::io::{self, Write};

use tracing::{debug, error, info};

use crate::config::ProbeConfig;
use crate::error::ProbeError;

pub mod http;

/// Status and decoded body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Response(ProbeResponse),
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// Writes `Status:`/`Response:` lines, or a single `Error:` line.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            ProbeOutcome::Response(resp) => {
                writeln!(out, "Status: {}", resp.status)?;
                writeln!(out, "Response: {}", resp.body)
            }
            ProbeOutcome::Failed(e) => writeln!(out, "Error: {}", e),
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(self, ProbeOutcome::Response(_))
    }
}

impl From<Result<ProbeResponse, ProbeError>> for ProbeOutcome {
    fn from(result: Result<ProbeResponse, ProbeError>) -> Self {
        match result {
            Ok(resp) => ProbeOutcome::Response(resp),
            Err(e) => ProbeOutcome::Failed(e),
        }
    }
}

/// Single attempt against the configured target. Never retries and never
/// returns an error: transport faults end up in `ProbeOutcome::Failed`.
pub async fn run(config: &ProbeConfig) -> ProbeOutcome {
    let url = config.url.as_str();
    let request_timeout = config.timeout();
    debug!("probing {} (timeout: {:?})", url, request_timeout);

    let result = match http::build_client(request_timeout) {
        Ok(client) => http::probe_http(&client, url, request_timeout).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(resp) => info!("http probe {} success: status {}", url, resp.status),
        Err(e) => error!("http probe {} failed: {:?}", url, e),
    }
    result.into()
}
