//! reqwest-backed transport
//!
//! Posts forms as `application/x-www-form-urlencoded` and maps the outcome
//! onto [`RequestFailure`] the way a browser XHR reports it: any 2xx is a
//! success carrying the body, everything else is a failure.

use super::error::RequestFailure;
use super::traits::SubmitTransport;
use crate::state::FormSubmission;
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport for form submissions
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new client with the given request timeout
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SubmitTransport for HttpClient {
    async fn post_form(&self, url: &Url, body: &FormSubmission) -> Result<String, RequestFailure> {
        tracing::debug!("POST {url} ({} fields)", body.pairs().len());

        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body.encode())
            .send()
            .await
            .map_err(RequestFailure::network)?;

        let status = response.status();
        let text = response.text().await.map_err(RequestFailure::network)?;

        if status.is_success() {
            Ok(text)
        } else {
            tracing::debug!("POST {url} returned {status}");
            Err(RequestFailure::from_status(status, text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single request with a canned response, returning the raw request text
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });
        let url = Url::parse(&format!("http://{addr}/updateuser")).unwrap();
        (url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn alice() -> FormSubmission {
        [("name", "Alice")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let (url, server) = one_shot_server("200 OK", "ok").await;
        let client = HttpClient::new(DEFAULT_TIMEOUT).unwrap();

        let result = client.post_form(&url, &alice()).await;
        assert_eq!(result, Ok("ok".to_string()));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /updateuser HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("\r\n\r\nname=Alice"));
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_failure() {
        let (url, server) = one_shot_server("500 Internal Server Error", "invalid").await;
        let client = HttpClient::new(DEFAULT_TIMEOUT).unwrap();

        let result = client.post_form(&url, &alice()).await;
        assert_eq!(
            result,
            Err(RequestFailure::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
                body: "invalid".to_string(),
            })
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_request_body_is_kept() {
        let (url, server) = one_shot_server("400 Bad Request", "SoFi Money URL invalid").await;
        let client = HttpClient::new(DEFAULT_TIMEOUT).unwrap();

        let failure = client.post_form(&url, &alice()).await.unwrap_err();
        assert_eq!(failure.response_text(), "SoFi Money URL invalid");
        assert_eq!(failure.reason(), "Bad Request");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/updateuser")).unwrap();
        let client = HttpClient::new(DEFAULT_TIMEOUT).unwrap();

        let failure = client.post_form(&url, &alice()).await.unwrap_err();
        assert!(matches!(failure, RequestFailure::Network { .. }));
        assert_eq!(failure.response_text(), "");
    }
}
