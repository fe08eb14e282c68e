/// Network adapters for external API calls
mod scorecard_client;
mod vcs_repo_root_lookup;

pub use scorecard_client::{ScorecardClient, DEFAULT_API_URL};
pub use vcs_repo_root_lookup::VcsRepoRootLookup;

/// Minimal HTTP/1.1 server answering each connection with a canned response.
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    /// Serves `responses` in order, one per connection. Each request's
    /// request line is sent on the returned channel.
    pub async fn serve(responses: Vec<(u16, String)>) -> (String, mpsc::UnboundedReceiver<String>) {
        serve_with(|_| responses).await
    }

    /// Like [`serve`], with responses built from the bound `host:port`.
    pub async fn serve_with<F>(make_responses: F) -> (String, mpsc::UnboundedReceiver<String>)
    where
        F: FnOnce(&str) -> Vec<(u16, String)>,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let responses = make_responses(&address.to_string());
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&request).into_owned();
                let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}", address), rx)
    }
}
