//! Info server test utilities

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Info server running on a loopback port for the duration of a test
pub struct TestServer {
    pub url: String,
    shutdown: CancellationToken,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Stop the server and wait for it to exit cleanly
    pub async fn stop(self) {
        self.shutdown.cancel();
        self.handle.await.unwrap().unwrap();
    }
}

/// Start an info server reporting `version` on an ephemeral port
pub async fn spawn_info_server(version: &str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/info", listener.local_addr().unwrap());
    let shutdown = CancellationToken::new();

    let version = version.to_string();
    let token = shutdown.clone();
    let handle = tokio::spawn(async move {
        version_probe::server::serve(listener, &version, token).await
    });

    TestServer {
        url,
        shutdown,
        handle,
    }
}

/// Start a server that accepts connections but never answers them.
///
/// Returns its URL and the accept task; abort the task to close the connections.
pub async fn spawn_silent_server() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/info", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    (url, handle)
}

/// URL on loopback where nothing is listening
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/info", addr)
}
