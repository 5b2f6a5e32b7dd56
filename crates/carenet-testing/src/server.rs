use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A router bound to an ephemeral localhost port, served on a background task.
pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Bind `router` on `127.0.0.1:0` and start serving it.
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server error");
        });
        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
