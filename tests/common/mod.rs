//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use catalog_fetch::catalog::Product;
use catalog_fetch::source::{ProductSource, SourceError};

/// A catalog body with `n` products.
pub fn catalog_body(n: u64) -> String {
    let products: Vec<serde_json::Value> = (1..=n)
        .map(|id| {
            let sizes = if id % 2 == 0 { vec!["M"] } else { vec!["S", "L"] };
            serde_json::json!({
                "id": id,
                "sku": 1000 + id,
                "title": format!("Tee {}", id),
                "availableSizes": sizes,
                "price": 10.5,
                "currencyId": "USD",
                "currencyFormat": "$",
                "isFreeShipping": true
            })
        })
        .collect();
    serde_json::json!({ "data": { "products": products } }).to_string()
}

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` receives the 1-based request number and returns status and body.
/// Returns the bound address and a shared request counter.
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let counter = Arc::new(AtomicU32::new(0));
    let f = Arc::new(f);
    let count = counter.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let count = count.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let n = count.fetch_add(1, Ordering::SeqCst) + 1;
                        let (status, body) = f(n).await;
                        let status_text = match status {
                            200 => "200 OK",
                            302 => "302 Found",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, counter)
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start a backend that announces a longer body than it sends, then hangs up.
pub async fn start_truncating_backend() -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let counter = Arc::new(AtomicU32::new(0));
    let count = counter.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            count.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                let partial = "{\"data\": {\"products\": [";
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    partial.len() + 512,
                    partial
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, counter)
}

/// Counts every attempt made against the wrapped source.
pub struct CountingSource<S> {
    inner: S,
    attempts: AtomicU32,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            attempts: AtomicU32::new(0),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<S: ProductSource> ProductSource for CountingSource<S> {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_products().await
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}
