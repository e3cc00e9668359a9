//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use shelf_server::{app, config::Config, AppState};
use tokio::net::TcpListener;

/// A server bound to an ephemeral port on localhost.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Spawn a server with the default configuration.
    pub async fn spawn() -> Self {
        Self::spawn_with(Config::default()).await
    }

    /// Spawn a server with the given configuration.
    pub async fn spawn_with(config: Config) -> Self {
        let state = AppState::new(config).expect("state");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("serve");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
