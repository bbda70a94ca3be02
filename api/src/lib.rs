//! # API crate — shared client for the railway ticketing service
//!
//! Both front ends (the reactive Dioxus app and the imperative DOM shell)
//! talk to the same remote JSON API through this crate. Every operation is
//! split into a pure planning step and a transport step:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`requests`] | Maps each operation to an [`ApiRequest`] value (method, path, query, body) |
//! | [`models`] | View models mirroring server JSON: profiles, orders, tickets, train specs |
//! | `wire` | Response envelopes and the `status == 0` acceptance rule |
//!
//! [`Client`] executes planned requests: over `gloo-net` on wasm32, over
//! `reqwest` elsewhere. The split keeps endpoint and decoding logic testable
//! on native targets.

use serde::de::DeserializeOwned;

pub mod models;
pub mod requests;
mod wire;

pub use models::{Order, Profile, PurchaseOutcome, RegisterForm, Ticket, TrainSpec};
pub use requests::{search_is_complete, short_date, ApiRequest, Method};

use wire::{accept, Ack, BuyReply, OrdersReply, ProfileReply, TicketsReply, TransferReply};

/// Failures a request can end in.
///
/// The UI distinguishes exactly two tiers: transport-level trouble
/// ([`ApiError::is_network`]) and an application-level rejection carried in a
/// non-zero `status` field. There is no retry machinery; every failure is
/// terminal for the triggering action.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with HTTP status {code}")]
    Http { code: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("rejected by server (status {status})")]
    Rejected { status: i64 },
}

impl ApiError {
    /// True for everything except an explicit server rejection.
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Handle on the remote ticketing API.
#[derive(Debug, Clone)]
pub struct Client {
    base: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client against the standard `/api` mount. On native targets (where
    /// relative URLs have no origin to resolve against) use [`Client::with_base`]
    /// with an absolute URL instead.
    pub fn new() -> Self {
        Self::with_base("/api")
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    // -- sessions ---------------------------------------------------------

    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.send::<Ack>(requests::login(username, password))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    pub async fn logout(&self, username: &str) -> Result<(), ApiError> {
        self.send::<Ack>(requests::logout(username))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<(), ApiError> {
        self.send::<Ack>(requests::register(form))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    pub async fn profile(&self, username: &str) -> Result<Profile, ApiError> {
        let reply = self
            .send::<ProfileReply>(requests::profile(username))
            .await
            .and_then(accept)?;
        reply
            .profile
            .ok_or_else(|| ApiError::Decode("profile reply carried no profile".to_string()))
    }

    /// Two-step sign-in: establish the session, then fetch the profile.
    /// The caller only gets a profile back when both steps succeed; a
    /// rejected login never reaches the profile fetch.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Profile, ApiError> {
        self.login(username, password).await?;
        self.profile(username).await
    }

    // -- search -----------------------------------------------------------

    pub async fn search_tickets(
        &self,
        from: &str,
        to: &str,
        date: &str,
        sort: &str,
    ) -> Result<Vec<Ticket>, ApiError> {
        let reply = self
            .send::<TicketsReply>(requests::search_tickets(from, to, date, sort))
            .await
            .and_then(accept)?;
        Ok(reply.tickets())
    }

    pub async fn search_transfers(
        &self,
        from: &str,
        to: &str,
        date: &str,
        sort: &str,
    ) -> Result<Vec<Ticket>, ApiError> {
        let reply = self
            .send::<TransferReply>(requests::search_transfers(from, to, date, sort))
            .await
            .and_then(accept)?;
        Ok(reply.transfer.iter().map(|r| Ticket::parse(r)).collect())
    }

    // -- orders -----------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub async fn buy(
        &self,
        username: &str,
        train_id: &str,
        date: &str,
        num: u32,
        from: &str,
        to: &str,
        queue: bool,
    ) -> Result<PurchaseOutcome, ApiError> {
        let reply = self
            .send::<BuyReply>(requests::buy(username, train_id, date, num, from, to, queue))
            .await
            .and_then(accept)?;
        reply.outcome()
    }

    pub async fn orders(&self, username: &str) -> Result<Vec<Order>, ApiError> {
        let reply = self
            .send::<OrdersReply>(requests::orders(username))
            .await
            .and_then(accept)?;
        Ok(reply.orders)
    }

    /// `index` is 1-based from the top of the order list.
    pub async fn refund(&self, username: &str, index: u32) -> Result<(), ApiError> {
        self.send::<Ack>(requests::refund(username, index))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    // -- admin ------------------------------------------------------------

    pub async fn add_train(&self, spec: &TrainSpec) -> Result<(), ApiError> {
        self.send::<Ack>(requests::add_train(spec))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    pub async fn delete_train(&self, train_id: &str) -> Result<(), ApiError> {
        self.send::<Ack>(requests::delete_train(train_id))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    pub async fn release_train(&self, train_id: &str) -> Result<(), ApiError> {
        self.send::<Ack>(requests::release_train(train_id))
            .await
            .and_then(accept)
            .map(|_| ())
    }

    pub async fn clean_system(&self) -> Result<(), ApiError> {
        self.send::<Ack>(requests::clean_system())
            .await
            .and_then(accept)
            .map(|_| ())
    }

    /// The server may die before answering; callers treat any reply,
    /// including none, as the shutdown having been requested.
    pub async fn exit_system(&self) -> Result<(), ApiError> {
        self.send::<Ack>(requests::exit_system())
            .await
            .and_then(accept)
            .map(|_| ())
    }

    // -- transport --------------------------------------------------------

    #[cfg(target_arch = "wasm32")]
    async fn send<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = format!("{}{}", self.base, req.path);
        tracing::debug!(method = ?req.method, %url, "api request");

        let builder = match req.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = builder.query(req.query.iter().map(|(k, v)| (*k, v.as_str())));

        let response = match &req.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let code = response.status();
        if !(200..300).contains(&code) {
            return Err(ApiError::Http { code });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, req.path);
        tracing::debug!(method = ?req.method, %url, "api request");

        let method = match req.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = reqwest::Client::new()
            .request(method, &url)
            .query(&req.query);
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let code = response.status().as_u16();
        if !response.status().is_success() {
            return Err(ApiError::Http { code });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_not_a_network_failure() {
        assert!(!ApiError::Rejected { status: 4 }.is_network());
        assert!(ApiError::Network("refused".to_string()).is_network());
        assert!(ApiError::Http { code: 502 }.is_network());
        assert!(ApiError::Decode("bad json".to_string()).is_network());
    }

    #[test]
    fn default_client_targets_api_mount() {
        let client = Client::new();
        assert_eq!(client.base, "/api");
        let client = Client::with_base("http://localhost:8080/api");
        assert_eq!(client.base, "http://localhost:8080/api");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod transport_tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned JSON body per accepted connection, then stop
    /// listening. Requests are consumed without being parsed.
    async fn stub_server(bodies: Vec<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            for body in bodies {
                let Ok((mut sock, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 2048];
                let _ = sock.read(&mut buf).await;
                let reply = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body,
                );
                let _ = sock.write_all(reply.as_bytes()).await;
            }
        });
        base
    }

    const PROFILE_OK: &str = r#"{"status": 0, "profile": {"username": "alice", "name": "Alice", "mailAddr": "alice@example.com", "privilege": 10}}"#;

    #[tokio::test]
    async fn sign_in_returns_the_profile_when_both_steps_succeed() {
        let base = stub_server(vec![r#"{"status": 0}"#, PROFILE_OK]).await;
        let profile = Client::with_base(base)
            .sign_in("alice", "secret")
            .await
            .unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.privilege, 10);
    }

    #[tokio::test]
    async fn sign_in_stops_at_a_rejected_login() {
        // One canned reply only: a rejected login must not be followed by a
        // profile fetch.
        let base = stub_server(vec![r#"{"status": 3}"#]).await;
        match Client::with_base(base).sign_in("alice", "wrong").await {
            Err(ApiError::Rejected { status }) => assert_eq!(status, 3),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sign_in_fails_when_the_profile_fetch_is_rejected() {
        let base = stub_server(vec![r#"{"status": 0}"#, r#"{"status": 7}"#]).await;
        match Client::with_base(base).sign_in("alice", "secret").await {
            Err(ApiError::Rejected { status }) => assert_eq!(status, 7),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
