//! Remote fetch of the published sheet

use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::core::error::SourceError;

/// Something that can turn a URL into response text
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, SourceError>;
}

/// Blocking HTTP(S) fetcher with a global timeout
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let fetch_error = |reason: String| SourceError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|err| fetch_error(err.to_string()))?;
        debug!(status = %response.status(), "sheet response received");

        response
            .into_body()
            .read_to_string()
            .map_err(|err| fetch_error(format!("failed reading response body: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port and return its URL
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/sheet.csv")
    }

    #[test]
    fn test_fetch_returns_body() {
        let url = serve_once("HTTP/1.1 200 OK", "question,answer\nQ,A\n");
        let fetcher = HttpFetcher::new(Duration::from_secs(5));
        let body = fetcher.fetch(&url).unwrap();
        assert_eq!(body, "question,answer\nQ,A\n");
    }

    #[test]
    fn test_fetch_http_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "");
        let fetcher = HttpFetcher::new(Duration::from_secs(5));
        let err = fetcher.fetch(&url).unwrap_err();
        assert_eq!(err.code(), "FETCH_FAILURE");
    }

    #[test]
    fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let fetcher = HttpFetcher::new(Duration::from_secs(2));
        let err = fetcher
            .fetch(&format!("http://127.0.0.1:{port}/sheet.csv"))
            .unwrap_err();
        assert!(matches!(err, SourceError::Fetch { .. }));
    }
}
