//! A minimal HTTP/1.1 stub server: answers every request with a fixed
//! status and records what it received. Just enough for the load-balancer
//! sink tests, not a general server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct StubRequest {
    pub path: String,
    pub body: String,
}

/// Bind an ephemeral port and serve connections serially until the
/// listener task is dropped with the runtime. Returns the `host:port`
/// endpoint and a channel of captured requests.
pub async fn spawn_http_stub(status: u16) -> (String, mpsc::UnboundedReceiver<StubRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let endpoint = listener.local_addr().expect("stub addr").to_string();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };

            let mut buf: Vec<u8> = Vec::new();
            let mut chunk = [0u8; 1024];
            let request = loop {
                let n = match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break None,
                    Ok(n) => n,
                };
                buf.extend_from_slice(&chunk[..n]);
                if let Some(header_end) = find_subslice(&buf, b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
                    let content_length = content_length(&head);
                    let body_start = header_end + 4;
                    if buf.len() >= body_start + content_length {
                        let path = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or_default()
                            .to_string();
                        let body = String::from_utf8_lossy(
                            &buf[body_start..body_start + content_length],
                        )
                        .to_string();
                        break Some(StubRequest { path, body });
                    }
                }
            };

            let Some(request) = request else { continue };
            let _ = tx.send(request);

            let response = format!(
                "HTTP/1.1 {} STUB\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (endpoint, rx)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn find_subslice(
    haystack: &[u8],
    needle: &[u8],
) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
