//! Shared utilities for integration testing.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A scripted mock attestation service.
///
/// Serves the submission endpoint at `/snapshot` and the status endpoint at
/// `/snapshot/status`. Each path pops responses from its own script; once a
/// script is down to its last response, that response repeats.
pub struct MockService {
    pub addr: SocketAddr,
    submit_hits: Arc<AtomicUsize>,
    status_hits: Arc<AtomicUsize>,
}

impl MockService {
    pub fn endpoint(&self) -> String {
        format!("http://{}/snapshot", self.addr)
    }

    #[allow(dead_code)]
    pub fn submit_hits(&self) -> usize {
        self.submit_hits.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn status_hits(&self) -> usize {
        self.status_hits.load(Ordering::SeqCst)
    }
}

/// Start a mock service with per-path response scripts of (status, body).
pub async fn start_mock_service(
    submit_responses: Vec<(u16, String)>,
    status_responses: Vec<(u16, String)>,
) -> MockService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let submit_script = Arc::new(Mutex::new(VecDeque::from(submit_responses)));
    let status_script = Arc::new(Mutex::new(VecDeque::from(status_responses)));
    let submit_hits = Arc::new(AtomicUsize::new(0));
    let status_hits = Arc::new(AtomicUsize::new(0));

    let service = MockService {
        addr,
        submit_hits: submit_hits.clone(),
        status_hits: status_hits.clone(),
    };

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            let submit_script = submit_script.clone();
            let status_script = status_script.clone();
            let submit_hits = submit_hits.clone();
            let status_hits = status_hits.clone();

            tokio::spawn(async move {
                let Some(path) = read_request(&mut socket).await else {
                    return;
                };

                let (script, hits) = if path.ends_with("/status") {
                    (status_script, status_hits)
                } else {
                    (submit_script, submit_hits)
                };
                hits.fetch_add(1, Ordering::SeqCst);

                let (status, body) = {
                    let mut script = script.lock().unwrap();
                    if script.len() > 1 {
                        script.pop_front().unwrap()
                    } else {
                        script
                            .front()
                            .cloned()
                            .unwrap_or((500, "script exhausted".to_string()))
                    }
                };

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    status_text(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    service
}

/// Read one HTTP request (head + content-length body) and return its path.
async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_head_end(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let path = head.lines().next()?.split_whitespace().nth(1)?.to_string();

    let content_length: usize = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0);

    // Drain the body so the client finishes writing before we respond.
    let mut have = buf.len() - (head_end + 4);
    while have < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        have += n;
    }

    Some(path)
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        202 => "Accepted",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "OK",
    }
}
