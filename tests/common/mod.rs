use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use origin_guard::guard_policy::guard_policy::GuardPolicy;
use origin_guard::origin_client::reqwest_origin_client::ReqwestOriginClient;
use origin_guard::{ServerState, router};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// An origin that answers every connection with the same raw bytes, so tests
/// control the status line exactly.
pub async fn start_raw_origin(raw_response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                read_head(&mut socket).await;
                let _ = socket.write_all(raw_response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Serves the guard on a real socket in front of `origin_url`.
pub async fn start_guard(origin_url: &str) -> SocketAddr {
    let client = ReqwestOriginClient::new(origin_url, Duration::from_secs(5)).unwrap();
    let app = router(ServerState {
        client: Arc::new(client),
        policy: Arc::new(GuardPolicy::default()),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Sends a bare HTTP/1.1 GET and returns everything the server wrote back.
pub async fn raw_get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut raw))
        .await
        .unwrap()
        .unwrap();

    String::from_utf8_lossy(&raw).into_owned()
}

async fn read_head(socket: &mut TcpStream) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];

    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}
