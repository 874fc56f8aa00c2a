//! 共享测试工具：本地 HTTP 桩服务

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// 1x1 PNG 头部，足以充当图片内容
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

/// 固定响应
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl CannedResponse {
    pub fn png() -> Self {
        Self {
            status: 200,
            content_type: Some("image/png".to_string()),
            body: PNG_BYTES.to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: Some("text/plain".to_string()),
            body: b"error".to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn html() -> Self {
        Self {
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: b"<html></html>".to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn to_bytes(&self) -> Vec<u8> {
        let reason = if (200..300).contains(&self.status) { "OK" } else { "Error" };
        let mut head = format!("HTTP/1.1 {} {reason}\r\n", self.status);
        if let Some(ref content_type) = self.content_type {
            head.push_str(&format!("Content-Type: {content_type}\r\n"));
        }
        head.push_str(&format!(
            "Content-Length: {}\r\nConnection: close\r\n\r\n",
            self.body.len()
        ));
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// 在随机端口上运行的桩服务
pub struct StubServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// 每个连接都返回同一个响应
    pub async fn start(response: CannedResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let request_lines = Arc::new(Mutex::new(Vec::new()));

        let task_hits = hits.clone();
        let task_lines = request_lines.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let response = response.clone();
                let hits = task_hits.clone();
                let lines = task_lines.clone();

                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    hits.fetch_add(1, Ordering::SeqCst);

                    let request = String::from_utf8_lossy(&buf);
                    if let Some(line) = request.lines().next() {
                        lines.lock().await.push(line.to_string());
                    }

                    if !response.delay.is_zero() {
                        tokio::time::sleep(response.delay).await;
                    }
                    let _ = socket.write_all(&response.to_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            request_lines,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// 收到的请求行，例如 `GET /create?size=300x300&data=... HTTP/1.1`
    pub async fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().await.clone()
    }
}
