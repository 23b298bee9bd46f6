//! Wire-level tests against a minimal in-process HTTP stub.

use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;
use chainweb3_http::{HttpProvider, HttpProviderConfig};

/// Serve exactly one HTTP exchange, returning the raw request bytes.
async fn serve_once(
    listener: TcpListener,
    status_line: &'static str,
    body: &'static str,
) -> Vec<u8> {
    let (mut socket, _) = listener.accept().await.unwrap();
    let request = read_request(&mut socket).await;
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.unwrap();
    request
}

async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(header_end) = headers_end(&buf) {
            if buf.len() >= header_end + content_length(&buf[..header_end]) {
                break;
            }
        }
    }
    buf
}

fn headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &[u8]) -> usize {
    String::from_utf8_lossy(head)
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

#[tokio::test]
async fn decodes_a_boolean_result_over_the_wire() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_once(
        listener,
        "200 OK",
        r#"{"jsonrpc":"2.0","id":67,"result":true}"#,
    ));

    let provider = HttpProvider::for_address(addr.to_string());
    let raw = provider
        .send_request("net_listening", Value::Null)
        .await
        .unwrap();
    assert!(raw.to_bool().unwrap());

    let request = String::from_utf8(server.await.unwrap()).unwrap();
    assert!(request.starts_with("POST / HTTP/1.1"));
    assert!(request.contains(r#""method":"net_listening""#));
    assert!(request.contains(r#""jsonrpc":"2.0""#));
}

#[tokio::test]
async fn balance_params_travel_in_positional_order() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_once(
        listener,
        "200 OK",
        r#"{"jsonrpc":"2.0","id":1,"result":"0x234c8a3397aab58"}"#,
    ));

    let provider = HttpProvider::for_address(addr.to_string());
    let raw = provider
        .send_request(
            "eth_getBalance",
            json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]),
        )
        .await
        .unwrap();
    assert_eq!(raw.to_quantity().unwrap().to_u64().unwrap(), 0x234c8a3397aab58);

    let request = String::from_utf8(server.await.unwrap()).unwrap();
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let envelope: Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        envelope["params"],
        json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"])
    );
    assert_eq!(envelope["method"], "eth_getBalance");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_once(listener, "500 Internal Server Error", ""));

    let provider = HttpProvider::for_address(addr.to_string());
    let err = provider
        .send_request("eth_blockNumber", Value::Null)
        .await
        .unwrap_err();

    match err {
        ProviderError::HttpStatus { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn node_error_objects_surface_as_rpc_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_once(
        listener,
        "200 OK",
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
    ));

    let provider = HttpProvider::for_address(addr.to_string());
    let raw = provider
        .send_request("eth_blockNumbe", Value::Null)
        .await
        .unwrap();

    match raw.into_value() {
        Err(ProviderError::Rpc(rpc)) => assert_eq!(rpc.code, -32601),
        other => panic!("unexpected {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn slow_server_hits_the_deadline() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let _ = read_request(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let provider = HttpProvider::new(HttpProviderConfig::new(addr.to_string(), 1, false));
    let err = provider
        .send_request("eth_blockNumber", Value::Null)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout { ms: 1000 }));
    server.abort();
}
