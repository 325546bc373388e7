use std::error::Error as StdError;

/// Transport failures raised while probing. Every variant is reported with the
/// same `Error:` prefix; the split only matters for logging.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request to {url} timed out: {detail}")]
    Timeout { url: String, detail: String },

    #[error("request to {url} failed: {detail}")]
    Transport { url: String, detail: String },

    #[error("could not build http client: {0}")]
    Client(String),
}

impl ProbeError {
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let detail = error_chain(&err);
        if err.is_timeout() {
            return ProbeError::Timeout { url: url.to_string(), detail };
        }
        ProbeError::Transport {
            url: url.to_string(),
            detail,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }
}

/// Joins an error and its sources, reqwest hides the useful part
/// (e.g. "Connection refused") in the chain.
fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let msg = cause.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.1.as_deref().map(|l| l as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn should_join_the_source_chain() {
        let err = Layer(
            "error sending request",
            Some(Box::new(Layer("client error (Connect)", Some(Box::new(Layer("Connection refused", None)))))),
        );
        assert_eq!(
            error_chain(&err),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[test]
    fn should_skip_sources_already_in_the_message() {
        let err = Layer("tcp connect error: Connection refused", Some(Box::new(Layer("Connection refused", None))));
        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");
    }

    #[test]
    fn should_describe_the_target_in_the_message() {
        let err = ProbeError::Timeout {
            url: "http://localhost:8000/playlists/public".to_string(),
            detail: "operation timed out".to_string(),
        };
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "request to http://localhost:8000/playlists/public timed out: operation timed out"
        );
    }
}
