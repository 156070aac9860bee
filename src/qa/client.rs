//! QA backend client.
//!
//! The backend exposes a single endpoint: `GET /api/qa?question=…` answers
//! with a streamed `text/plain; charset=utf-8` body. No envelope, no SSE
//! framing: the bytes are the answer, in display order.

use futures::StreamExt;
use log::{debug, info, warn};
use std::fmt;
use tokio::sync::mpsc::Sender;

use crate::qa::decode::StreamDecoder;

/// Errors that can occur while streaming an answer.
/// Every failure is terminal for its request; there are no retries.
#[derive(Debug)]
pub enum StreamError {
    /// The backend was reachable but answered with a failure status.
    Http { status: u16, message: String },
    /// Network-level failure (DNS, connection refused, mid-body read error).
    Network(String),
    /// The mpsc channel was closed (UI dropped the receiver).
    ChannelClosed,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Http { status, message } => {
                if message.is_empty() {
                    write!(f, "server error (HTTP {status})")
                } else {
                    write!(f, "server error (HTTP {status}): {message}")
                }
            }
            StreamError::Network(msg) => write!(f, "network error: {msg}"),
            StreamError::ChannelClosed => write!(f, "channel closed"),
        }
    }
}

impl std::error::Error for StreamError {}

/// Client for the QA endpoint. Cheap to clone; clones share the connection
/// pool.
#[derive(Clone)]
pub struct QaClient {
    base_url: String,
    client: reqwest::Client,
}

impl QaClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Streams the answer to `question`, sending each decoded piece of text
    /// over `sender` as it arrives.
    ///
    /// Returns when the stream ends or on the first failure. The caller
    /// cancels by aborting the task or dropping the receiver.
    pub async fn stream_answer(
        &self,
        question: &str,
        sender: Sender<String>,
    ) -> Result<(), StreamError> {
        info!("QA request: {} chars", question.chars().count());

        let response = self
            .client
            .get(format!("{}/api/qa", self.base_url))
            .query(&[("question", question)])
            .send()
            .await
            .map_err(|e| StreamError::Network(e.to_string()))?;

        debug!("QA response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("QA API error: {} - {}", status, err_body);
            return Err(StreamError::Http {
                status,
                message: err_body,
            });
        }

        let mut decoder = StreamDecoder::new();
        let mut stream = response.bytes_stream();
        let mut chunk_count = 0usize;
        let mut total_content_len = 0usize;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| StreamError::Network(e.to_string()))?;
            debug!("Raw chunk received: {} bytes", chunk.len());

            let text = decoder.decode(&chunk);
            if text.is_empty() {
                // The whole chunk was the head of a split character.
                continue;
            }
            chunk_count += 1;
            total_content_len += text.len();
            if sender.send(text).await.is_err() {
                warn!("Answer chunk send failed: receiver dropped");
                return Err(StreamError::ChannelClosed);
            }
        }

        // A stream that ends mid-character still yields its replacement mark.
        let tail = decoder.finish();
        if !tail.is_empty() {
            warn!("Stream ended mid-character");
            if sender.send(tail).await.is_err() {
                return Err(StreamError::ChannelClosed);
            }
        }

        info!(
            "Stream complete: {} chunks, {} content bytes",
            chunk_count, total_content_len
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_status_code() {
        let e = StreamError::Http {
            status: 500,
            message: "服务器内部错误".to_string(),
        };
        let text = e.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("服务器内部错误"));
    }

    #[test]
    fn test_error_display_without_body() {
        let e = StreamError::Http {
            status: 404,
            message: String::new(),
        };
        assert_eq!(e.to_string(), "server error (HTTP 404)");
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = QaClient::new("http://localhost:8001/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8001");
    }
}
