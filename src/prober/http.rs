use reqwest::Client;
use tokio::time::{timeout, Duration, Instant};
use tracing::debug;

use crate::error::ProbeError;
use crate::prober::ProbeResponse;

/// Client with default headers; the timeout is only set when configured.
pub fn build_client(request_timeout: Option<Duration>) -> Result<Client, ProbeError> {
    let mut builder = Client::builder();
    if let Some(t) = request_timeout {
        builder = builder.timeout(t);
    }
    builder.build().map_err(|e| ProbeError::Client(e.to_string()))
}

/// One GET, status and full body. Non-2xx statuses are still a response.
pub async fn probe_http(
    client: &Client,
    url: &str,
    request_timeout: Option<Duration>,
) -> Result<ProbeResponse, ProbeError> {
    let start = Instant::now();
    let attempt = async {
        let resp = client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, e))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, e))?;
        Ok::<_, ProbeError>(ProbeResponse { status, body })
    };

    let result = match request_timeout {
        Some(t) => timeout(t, attempt)
            .await
            .unwrap_or_else(|elapsed| {
                Err(ProbeError::Timeout {
                    url: url.to_string(),
                    detail: elapsed.to_string(),
                })
            }),
        None => attempt.await,
    };
    debug!("http probe {} finished in {:?}", url, start.elapsed());
    result
}
