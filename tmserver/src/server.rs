//! High-level server wrapper around Axum
//!
//! Wraps router registration and startup so the application only assembles
//! routers and calls `start()`/`wait()`. Startup recovers from a busy port
//! by retrying on the next port number after a fixed delay.

use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::{signal, task::JoinHandle};
use tracing::{error, info, warn};

/// Delay between bind attempts when the port is already in use
pub const DEFAULT_BIND_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Main HTTP server
pub struct Server {
    name: String,
    http_port: u16,
    retry_delay: Duration,
    router: Router,
    local_addr: Option<SocketAddr>,
    join_handle: Option<JoinHandle<()>>,
}

impl Server {
    /// Create a new server instance
    ///
    /// # Arguments
    ///
    /// * `name` - Server name (for logs)
    /// * `http_port` - Preferred HTTP port; the server may end up on a
    ///   higher one if this port is busy at startup
    pub fn new(name: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            http_port,
            retry_delay: DEFAULT_BIND_RETRY_DELAY,
            router: Router::new(),
            local_addr: None,
            join_handle: None,
        }
    }

    /// Override the bind retry delay (mainly for tests)
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Add a sub-router to the server
    ///
    /// - If `path` is "/", merges directly into the main router
    /// - Otherwise, nests the router under the given path
    pub fn add_router(&mut self, path: &str, sub_router: Router) {
        let router = std::mem::take(&mut self.router);
        self.router = if path == "/" {
            router.merge(sub_router)
        } else {
            let normalized = format!("/{}", path.trim_start_matches('/'));
            router.nest(&normalized, sub_router)
        };
    }

    /// Start the HTTP server
    ///
    /// Binds the configured port (retrying upward while it is busy), then
    /// serves in a background task until the process receives Ctrl+C.
    pub async fn start(&mut self) -> io::Result<()> {
        let listener = bind_with_retry(self.http_port, self.retry_delay).await?;
        let addr = listener.local_addr()?;
        self.local_addr = Some(addr);
        info!("Server {} running on http://{}", self.name, addr);

        let router = self.router.clone();
        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router.into_make_service()).await {
                error!(error = %e, "HTTP server terminated");
            }
        });

        let shutdown_task = tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Ctrl+C received, shutting down");
            }
        });

        self.join_handle = Some(tokio::spawn(async move {
            tokio::select! {
                _ = server_task => {},
                _ = shutdown_task => {},
            }
        }));

        Ok(())
    }

    /// Wait for the server to finish
    pub async fn wait(&mut self) {
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }

    /// The address actually bound, once started
    ///
    /// May differ from the configured port when the bind retry kicked in.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// The configured (preferred) HTTP port
    pub fn http_port(&self) -> u16 {
        self.http_port
    }
}

/// Bind a listener, walking up the port range while ports are busy
///
/// On `AddrInUse`, logs a warning, sleeps `delay`, and retries on
/// `port + 1`. Any other bind error is fatal, as is running out of port
/// numbers.
pub async fn bind_with_retry(port: u16, delay: Duration) -> io::Result<TcpListener> {
    let mut port = port;
    loop {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
                let next = match port.checked_add(1) {
                    Some(next) => next,
                    None => return Err(e),
                };
                warn!(
                    "Port {} already in use, retrying on port {} in {:?}",
                    port, next, delay
                );
                tokio::time::sleep(delay).await;
                port = next;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_directly_when_port_is_free() {
        // Port 0 asks the OS for any free port, so no retry is needed.
        let listener = bind_with_retry(0, Duration::from_millis(10)).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn retries_on_next_port_when_busy() {
        let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        let listener = bind_with_retry(taken_port, Duration::from_millis(10))
            .await
            .unwrap();
        let bound_port = listener.local_addr().unwrap().port();

        assert!(bound_port > taken_port);
    }

    #[tokio::test]
    async fn server_reports_bound_address() {
        let mut server = Server::new("test", 0).with_retry_delay(Duration::from_millis(10));
        server.add_router("/", Router::new());
        server.start().await.unwrap();

        let addr = server.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
    }
}
