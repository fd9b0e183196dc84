//! A tiny stand-in for the timeline API, used by the tests.
//! Answers one connection per scripted response, in order, and remembers
//! the request targets it was asked for.

use crate::config::BaseUrl;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct FakeApi {
    addr: std::net::SocketAddr,
    handle: JoinHandle<Vec<String>>,
}

impl FakeApi {
    pub async fn start(responses: Vec<(u16, &str)>) -> FakeApi {
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let mut targets = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let request = String::from_utf8_lossy(&request);
                let target = request
                    .lines()
                    .next()
                    .and_then(|line| line.split(' ').nth(1))
                    .unwrap_or_default()
                    .to_string();
                targets.push(target);
                let reply = format!(
                    "HTTP/1.1 {} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            targets
        });
        FakeApi { addr, handle }
    }

    pub fn base_url(&self) -> BaseUrl {
        format!("http://{}/timeline", self.addr).parse().unwrap()
    }

    /// Wait for all scripted responses to be served and return the request targets.
    pub async fn finish(self) -> Vec<String> {
        self.handle.await.unwrap()
    }
}

/// Base url of a port nothing listens on.
pub async fn closed_port_url() -> BaseUrl {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/timeline", addr).parse().unwrap()
}
