//! # tmserver - HTTP server plumbing for tmweb
//!
//! A thin layer over Axum so the application only deals with routers:
//!
//! - [`server`]: the [`Server`] wrapper with bind-retry startup (a busy
//!   port is retried on `port + 1` after a fixed delay) and Ctrl+C
//!   shutdown
//! - [`realtime`]: an SSE channel that accepts connections and logs
//!   connect/disconnect events
//! - [`logs`]: tracing subscriber initialization
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::Router;
//! use tmserver::Server;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     tmserver::init_logging();
//!
//!     let mut server = Server::new("my-app", 8080);
//!     server.add_router("/", Router::new());
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod logs;
pub mod realtime;
pub mod server;

pub use logs::init_logging;
pub use realtime::{RealtimeEvent, RealtimeState};
pub use server::{Server, bind_with_retry, DEFAULT_BIND_RETRY_DELAY};
