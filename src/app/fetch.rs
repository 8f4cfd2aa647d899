// HeadlineScope - app/fetch.rs
//
// Source page retrieval.
//
// `Fetcher` is the seam between the pipeline and the network: the pipeline
// only ever sees raw markup or a typed `FetchError`. `HttpFetcher` is the
// production implementation; tests substitute in-memory stubs.
//
// One GET per call. No retries and no backoff; a failure is reported once
// and the caller decides what to show.

use crate::util::constants;
use crate::util::error::FetchError;
use std::time::Duration;

/// Retrieves raw markup for a URL.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Request settings for `HttpFetcher`.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout.
    pub timeout: Duration,

    pub user_agent: String,

    /// Responses larger than this are rejected.
    pub max_body_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(constants::DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: constants::MAX_BODY_BYTES,
        }
    }
}

/// Blocking HTTP fetcher backed by a reusable `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild { source: e })?;
        Ok(Self { client, config })
    }

    fn request_error(&self, url: &str, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.config.timeout,
                source,
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, timeout_ms = self.config.timeout.as_millis() as u64, "Fetching");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Reject on the advertised length before downloading anything.
        if let Some(len) = response.content_length() {
            if len > self.config.max_body_bytes as u64 {
                return Err(FetchError::BodyTooLarge {
                    url: url.to_string(),
                    size: len as usize,
                    max_size: self.config.max_body_bytes,
                });
            }
        }

        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                self.request_error(url, e)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        // Chunked responses carry no length header.
        if body.len() > self.config.max_body_bytes {
            return Err(FetchError::BodyTooLarge {
                url: url.to_string(),
                size: body.len(),
                max_size: self.config.max_body_bytes,
            });
        }

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "Fetched");
        Ok(body)
    }
}

/// One-shot fetch with the default user agent and the given timeout.
pub fn fetch(url: &str, timeout: Duration) -> Result<String, FetchError> {
    HttpFetcher::new(FetchConfig {
        timeout,
        ..FetchConfig::default()
    })?
    .fetch(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve exactly one HTTP response on a loopback port. Returns the URL
    /// and a receiver yielding the raw request the server saw.
    fn serve_once(response: String, delay: Duration) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
            thread::sleep(delay);
            let _ = stream.write_all(response.as_bytes());
        });
        (url, rx)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html; charset=utf-8\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[test]
    fn test_success_returns_body_and_sends_user_agent() {
        let (url, request_rx) =
            serve_once(http_response("200 OK", "<html>ok</html>"), Duration::ZERO);
        let body = fetch(&url, Duration::from_secs(5)).unwrap();
        assert_eq!(body, "<html>ok</html>");

        let request = request_rx.recv().unwrap().to_lowercase();
        assert!(request.starts_with("get / "));
        assert!(request.contains("user-agent: mozilla/5.0"));
    }

    #[test]
    fn test_non_2xx_is_status_error() {
        let (url, _rx) = serve_once(
            http_response("503 Service Unavailable", "down"),
            Duration::ZERO,
        );
        match fetch(&url, Duration::from_secs(5)) {
            Err(FetchError::Status { status, url: u }) => {
                assert_eq!(status, 503);
                assert_eq!(u, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_slow_server_times_out() {
        let (url, _rx) = serve_once(http_response("200 OK", "late"), Duration::from_secs(3));
        match fetch(&url, Duration::from_millis(300)) {
            Err(FetchError::Timeout { timeout, .. }) => {
                assert_eq!(timeout, Duration::from_millis(300));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_refused_connection_is_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/");
        let err = fetch(&url, Duration::from_secs(2)).unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }), "{err:?}");
        assert_eq!(err.url(), Some(url.as_str()));
    }

    #[test]
    fn test_oversized_body_is_rejected() {
        let (url, _rx) = serve_once(http_response("200 OK", &"x".repeat(64)), Duration::ZERO);
        let fetcher = HttpFetcher::new(FetchConfig {
            max_body_bytes: 16,
            ..FetchConfig::default()
        })
        .unwrap();
        match fetcher.fetch(&url) {
            Err(FetchError::BodyTooLarge { size, max_size, .. }) => {
                assert_eq!(size, 64);
                assert_eq!(max_size, 16);
            }
            other => panic!("expected size error, got {other:?}"),
        }
    }
}
