//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use alpha_ticker_proxy::{HttpServer, ProxyConfig, Shutdown};

/// Request heads received by a mock upstream, lowercased.
pub type Captured = Arc<Mutex<Vec<String>>>;

/// Start a programmable mock upstream on an ephemeral port.
///
/// `f` decides the status and body of each response; every request head is
/// recorded before the response is written.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> (SocketAddr, Captured)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let log = captured.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let head = read_head(&mut socket).await;
                        log.lock().unwrap().push(head.to_lowercase());

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            403 => "403 Forbidden",
                            500 => "500 Internal Server Error",
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

    (addr, captured)
}

/// Start a mock upstream that always answers 200 with `body`.
#[allow(dead_code)]
pub async fn start_mock_upstream(body: String) -> (SocketAddr, Captured) {
    start_programmable_upstream(move || {
        let body = body.clone();
        async move { (200, body) }
    })
    .await
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Proxy configuration pointed at a local mock upstream.
pub fn config_for(upstream: SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.url = format!("http://{}/bapi/defi/v1/public/alpha-trade/ticker", upstream);
    config.upstream.system_proxy = false;
    config
}

/// Start the proxy on an ephemeral port. Trigger the returned handle to stop it.
pub async fn start_proxy(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Inbound test client that ignores environment proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Build an upstream body with the given `(symbol, change, volume)` rows.
#[allow(dead_code)]
pub fn upstream_body(rows: &[(&str, &str, &str)]) -> String {
    let data: Vec<_> = rows
        .iter()
        .map(|(symbol, change, volume)| {
            serde_json::json!({
                "symbol": symbol,
                "lastPrice": "1.2345",
                "priceChangePercent": change,
                "quoteVolume": volume,
                "highPrice": "2",
                "lowPrice": "1"
            })
        })
        .collect();

    serde_json::json!({ "code": "000000", "message": null, "data": data }).to_string()
}
