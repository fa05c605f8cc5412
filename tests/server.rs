use std::sync::Arc;

use pasta::{MemoryStore, Server, api};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::time::{Duration, timeout};

async fn roundtrip(addr: std::net::SocketAddr, raw: String) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

fn get(path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n")
}

fn post(path: &str, body: &str) -> String {
    format!(
        "POST {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\
         content-type: application/json\r\ncontent-length: {}\r\n\r\n{body}",
        body.len()
    )
}

#[tokio::test]
async fn serves_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(
        Server::from_listener(listener).serve_with_shutdown(
            api::app(Arc::new(MemoryStore::new())),
            async {
                let _ = stopped.await;
            },
        ),
    );

    let res = roundtrip(addr, get("/hello")).await;
    assert!(res.starts_with("HTTP/1.1 200 OK"), "{res}");
    assert!(res.ends_with("hello world"), "{res}");

    let res = roundtrip(addr, post("/pasta", r#"{"name":"orecchiette","cookingTime":12}"#)).await;
    assert!(res.starts_with("HTTP/1.1 200 OK"), "{res}");
    assert!(res.ends_with(r#"{"status":"ok"}"#), "{res}");

    let res = roundtrip(addr, get("/pasta/orecchiette")).await;
    assert!(res.ends_with(r#"{"name":"orecchiette","cookingTime":12}"#), "{res}");

    let res = roundtrip(addr, get("/nowhere")).await;
    assert!(res.starts_with("HTTP/1.1 404 Not Found"), "{res}");

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn shutdown_closes_idle_keep_alive_connections() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(
        Server::from_listener(listener).serve_with_shutdown(
            api::app(Arc::new(MemoryStore::new())),
            async {
                let _ = stopped.await;
            },
        ),
    );

    // No `connection: close`: the socket stays open after the response.
    let mut client = TcpStream::connect(addr).await.unwrap();
    client
        .write_all(b"GET /hello HTTP/1.1\r\nhost: localhost\r\n\r\n")
        .await
        .unwrap();
    let mut seen = Vec::new();
    let mut buf = [0_u8; 1024];
    while !seen.ends_with(b"hello world") {
        let n = client.read(&mut buf).await.unwrap();
        assert_ne!(n, 0, "connection closed before the response");
        seen.extend_from_slice(&buf[..n]);
    }

    stop.send(()).unwrap();
    timeout(Duration::from_secs(3), server)
        .await
        .expect("shutdown waited on an idle connection")
        .unwrap()
        .unwrap();

    let n = client.read(&mut buf).await.unwrap();
    assert_eq!(n, 0, "server should have closed the idle connection");
}
