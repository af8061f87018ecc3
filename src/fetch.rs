//! Page retrieval.
//!
//! The fetcher returns the full response body for any transport-successful
//! request. HTTP status codes are not inspected: a 404 error page is still
//! an HTML document a selector can run against, and the gateway forwards
//! whatever the remote served. Errors split into two kinds — the server
//! could not be reached at all, or the body could not be read — and both
//! are terminal for the request.
//!
//! No timeout is enforced here; a hung remote server hangs that request's
//! task until the client gives up.

use crate::error::PipelineError;

/// Fetch `url` and return the raw response body bytes.
///
/// # Errors
///
/// - [`PipelineError::Unreachable`] — DNS, connect, or TLS failure
/// - [`PipelineError::ReadFailed`] — the body could not be read
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, PipelineError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(PipelineError::Unreachable)?;

    let bytes = response
        .bytes()
        .await
        .map_err(PipelineError::ReadFailed)?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let bytes = fetch(&client, &mock_server.uri()).await.unwrap();
        assert_eq!(bytes, b"<html>hi</html>");
    }

    #[tokio::test]
    async fn test_fetch_ignores_http_status() {
        // A 404 with a body is a success: the gateway scrapes whatever
        // the remote served.
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<html>missing</html>"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let bytes = fetch(&client, &mock_server.uri()).await.unwrap();
        assert_eq!(bytes, b"<html>missing</html>");
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        // Bind then drop a listener so the port is known-closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::new();
        let err = fetch(&client, &format!("http://{}/", addr))
            .await
            .unwrap_err();
        match err {
            PipelineError::Unreachable(_) => {}
            e => panic!("Expected Unreachable, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_truncated_body_is_read_failure() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // A raw listener that promises more body than it sends, then
        // closes: headers arrive intact, the body read fails.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100000\r\n\r\npartial")
                .await
                .unwrap();
            socket.shutdown().await.ok();
        });

        let client = reqwest::Client::new();
        let err = fetch(&client, &format!("http://{}/", addr))
            .await
            .unwrap_err();
        match &err {
            PipelineError::ReadFailed(_) => {}
            e => panic!("Expected ReadFailed, got {:?}", e),
        }
        // RSS mode rephrases body-read failures as "no response".
        assert!(err.rss_description().starts_with("no response: "));
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let bytes = fetch(&client, &mock_server.uri()).await.unwrap();
        assert!(bytes.is_empty());
    }
}
