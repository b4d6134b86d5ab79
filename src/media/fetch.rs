// SPDX-License-Identifier: MPL-2.0
//! Downloading calendar artwork over HTTPS.

use crate::config::{MAX_DOWNLOAD_BYTES, USER_AGENT};
use crate::error::{Error, NetworkError, Result};
use crate::media::ImageData;
use futures_util::StreamExt;
use std::time::Duration;

/// Builds the HTTP client shared by every download.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Downloads `url` into memory, refusing bodies larger than `limit_bytes`.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str, limit_bytes: u64) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status(status.as_u16()).into());
    }

    if response.content_length().is_some_and(|len| len > limit_bytes) {
        return Err(NetworkError::TooLarge { limit_bytes }.into());
    }

    let mut body = Vec::with_capacity(response.content_length().unwrap_or(0) as usize);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if body.len() as u64 + chunk.len() as u64 > limit_bytes {
            return Err(NetworkError::TooLarge { limit_bytes }.into());
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Downloads and decodes one image.
///
/// Returns the URL alongside the result so the caller can match it against
/// the image it is currently waiting for.
pub async fn load_image(client: reqwest::Client, url: String) -> (String, Result<ImageData>) {
    let result = match fetch_bytes(&client, &url, MAX_DOWNLOAD_BYTES).await {
        Ok(bytes) => ImageData::from_encoded(bytes),
        Err(err) => Err(err),
    };

    match &result {
        Ok(image) => {
            tracing::debug!(%url, width = image.width, height = image.height, "Image downloaded");
        }
        Err(err) => tracing::debug!(%url, %err, "Image download failed"),
    }

    (url, result)
}

/// Returns the i18n key describing why an image could not be shown.
#[must_use]
pub fn failure_message_key(err: &Error) -> &'static str {
    match err {
        Error::Network(network) => network.i18n_key(),
        _ => "error-image-decode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::encode_test_png;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned HTTP response and returns its URL.
    async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let header = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(header.as_bytes()).await.expect("write header");
            socket.write_all(&body).await.expect("write body");
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/calender-2025/jan-2025-front.jpg")
    }

    /// Talks to the local server directly, ignoring any proxy in the environment.
    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client")
    }

    #[tokio::test]
    async fn load_image_returns_dimensions() {
        let url = serve_once("200 OK", encode_test_png(4, 6)).await;
        let (returned_url, result) = load_image(client(), url.clone()).await;

        assert_eq!(returned_url, url);
        let image = result.expect("image loads");
        assert_eq!((image.width, image.height), (4, 6));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once("404 Not Found", b"missing".to_vec()).await;
        let (_, result) = load_image(client(), url).await;

        assert_eq!(result.unwrap_err(), Error::Network(NetworkError::Status(404)));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let url = serve_once("200 OK", vec![0u8; 2048]).await;
        let result = fetch_bytes(&client(), &url, 1024).await;

        assert_eq!(
            result.unwrap_err(),
            Error::Network(NetworkError::TooLarge { limit_bytes: 1024 })
        );
    }

    #[tokio::test]
    async fn html_error_page_is_a_decode_failure() {
        let url = serve_once("200 OK", b"<html>oops</html>".to_vec()).await;
        let (_, result) = load_image(client(), url).await;

        let err = result.unwrap_err();
        assert_eq!(failure_message_key(&err), "error-image-decode");
    }

    #[test]
    fn client_builds_with_rustls() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn failure_keys_follow_network_error() {
        assert_eq!(
            failure_message_key(&Error::Network(NetworkError::Timeout)),
            "error-image-timeout"
        );
        assert_eq!(
            failure_message_key(&Error::Network(NetworkError::Status(500))),
            "error-image-status"
        );
    }
}
