use mockito::{Mock, ServerGuard};
use tokio::{net::TcpListener, task::JoinHandle};

/// Base URL that refuses connections, for exercising transport failures.
///
/// Port 1 (tcpmux) has no listener on any normal test host.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/";

/// Test context containing a running mock HTTP server.
///
/// The server shuts down when the context is dropped, so keep the context alive
/// for the whole test.
pub struct TestContext {
    /// Running mock server.
    pub server: ServerGuard,

    /// Registered mocks, paired with whether their hit count is asserted.
    mocks: Vec<(Mock, bool)>,
}

impl TestContext {
    pub(crate) fn new(server: ServerGuard, mocks: Vec<(Mock, bool)>) -> Self {
        Self { server, mocks }
    }

    /// Base URL of the mock server, e.g. `http://127.0.0.1:54321`.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Asserts the hit count of every route configured with `expect_hits`.
    ///
    /// # Panics
    /// - If any such route was hit a different number of times
    pub async fn assert_hits(&self) {
        for (mock, checked) in &self.mocks {
            if *checked {
                mock.assert_async().await;
            }
        }
    }
}

/// Server that accepts connections and never answers, for exercising timeouts.
///
/// Accepted sockets are held open until the server is dropped.
pub struct SilentServer {
    url: String,
    task: JoinHandle<()>,
}

impl SilentServer {
    /// Binds to an ephemeral local port and starts accepting.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind silent listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read silent listener address");

        let task = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        Self {
            url: format!("http://{}/", addr),
            task,
        }
    }

    /// Base URL of the listener, e.g. `http://127.0.0.1:54321/`.
    pub fn url(&self) -> String {
        self.url.clone()
    }
}

impl Drop for SilentServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
