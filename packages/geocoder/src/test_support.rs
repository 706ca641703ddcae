//! Local HTTP fixtures for geocoder tests.

use std::sync::Arc;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::Mutex,
    task::JoinHandle,
    time::Instant,
};

/// A request received by a [`CannedServer`].
#[derive(Debug, Clone)]
pub struct Received {
    /// When the request head finished arriving.
    pub at: Instant,
    /// Request line and headers, lowercased.
    pub head: String,
}

/// Serves the same canned response to every connection and records what
/// it received.
pub struct CannedServer {
    /// `http://127.0.0.1:<port>`
    pub base_url: String,
    received: Arc<Mutex<Vec<Received>>>,
    task: JoinHandle<()>,
}

impl CannedServer {
    /// Starts a server answering `status` with the JSON `body`.
    pub async fn start(status: u16, body: serde_json::Value) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let received = Arc::new(Mutex::new(Vec::new()));
        let body = body.to_string();

        let log = received.clone();
        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let log = log.clone();
                let body = body.clone();
                tokio::spawn(async move {
                    answer(stream, status, &body, &log).await;
                });
            }
        });

        Self {
            base_url,
            received,
            task,
        }
    }

    /// Starts a server that accepts connections and never answers.
    pub async fn hanging() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let task = tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                open.push(stream);
            }
        });

        Self {
            base_url,
            received: Arc::new(Mutex::new(Vec::new())),
            task,
        }
    }

    /// Requests received so far, in arrival order.
    pub async fn received(&self) -> Vec<Received> {
        self.received.lock().await.clone()
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn answer(mut stream: TcpStream, status: u16, body: &str, log: &Mutex<Vec<Received>>) {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    log.lock().await.push(Received {
        at: Instant::now(),
        head: String::from_utf8_lossy(&head).to_lowercase(),
    });

    let response = format!(
        "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
