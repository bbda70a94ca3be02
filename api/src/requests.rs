//! Request planning: every operation the client performs is first mapped to a
//! plain [`ApiRequest`] value, which the transport then executes. Keeping the
//! mapping pure lets the endpoints be unit-tested without a browser or a
//! server.

use serde_json::json;

use crate::models::{RegisterForm, TrainSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A planned HTTP request, relative to the API base path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Transcode a date from `YYYY-MM-DD` (what `<input type="date">` yields) to
/// the `MM-DD` form the server expects. Anything not in the long form passes
/// through unchanged.
pub fn short_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() == 3 {
        format!("{}-{}", parts[1], parts[2])
    } else {
        date.to_string()
    }
}

/// Search submissions require all three of from/to/date; an incomplete form
/// never reaches the network.
pub fn search_is_complete(from: &str, to: &str, date: &str) -> bool {
    !from.is_empty() && !to.is_empty() && !date.is_empty()
}

pub fn login(username: &str, password: &str) -> ApiRequest {
    ApiRequest::post("/sessions").body(json!({
        "username": username,
        "password": password,
    }))
}

pub fn logout(username: &str) -> ApiRequest {
    ApiRequest::delete(format!("/sessions/{username}"))
}

pub fn register(form: &RegisterForm) -> ApiRequest {
    ApiRequest::post("/users").body(json!(form))
}

pub fn profile(username: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{username}")).query("cur", username)
}

pub fn search_tickets(from: &str, to: &str, date: &str, sort: &str) -> ApiRequest {
    ApiRequest::get("/tickets")
        .query("from", from)
        .query("to", to)
        .query("date", short_date(date))
        .query("sort", sort)
}

pub fn search_transfers(from: &str, to: &str, date: &str, sort: &str) -> ApiRequest {
    ApiRequest::get("/transfer")
        .query("from", from)
        .query("to", to)
        .query("date", short_date(date))
        .query("sort", sort)
}

#[allow(clippy::too_many_arguments)]
pub fn buy(
    username: &str,
    train_id: &str,
    date: &str,
    num: u32,
    from: &str,
    to: &str,
    queue: bool,
) -> ApiRequest {
    ApiRequest::post(format!("/orders/{username}/buy")).body(json!({
        "trainID": train_id,
        "date": short_date(date),
        "num": num,
        "from": from,
        "to": to,
        "queue": queue,
    }))
}

pub fn orders(username: &str) -> ApiRequest {
    ApiRequest::get(format!("/orders/{username}"))
}

/// Refund the order at `index`, 1-based from the top of the order list as
/// returned by [`orders`]. Both front ends use this one convention.
pub fn refund(username: &str, index: u32) -> ApiRequest {
    ApiRequest::post(format!("/orders/{username}/refund")).body(json!({ "index": index }))
}

pub fn add_train(spec: &TrainSpec) -> ApiRequest {
    ApiRequest::post("/trains").body(json!(spec))
}

pub fn delete_train(train_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/trains/{train_id}"))
}

pub fn release_train(train_id: &str) -> ApiRequest {
    ApiRequest::post(format!("/trains/{train_id}/release"))
}

pub fn clean_system() -> ApiRequest {
    ApiRequest::post("/system/clean")
}

pub fn exit_system() -> ApiRequest {
    ApiRequest::post("/system/exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_transcodes_iso() {
        assert_eq!(short_date("2024-06-01"), "06-01");
        assert_eq!(short_date("06-01"), "06-01");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn search_completeness() {
        assert!(search_is_complete("Beijing", "Shanghai", "2024-06-01"));
        assert!(!search_is_complete("", "Shanghai", "2024-06-01"));
        assert!(!search_is_complete("Beijing", "", "2024-06-01"));
        assert!(!search_is_complete("Beijing", "Shanghai", ""));
    }

    #[test]
    fn ticket_search_plans_documented_example() {
        let req = search_tickets("Beijing", "Shanghai", "2024-06-01", "time");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/tickets");
        assert_eq!(
            req.query,
            vec![
                ("from", "Beijing".to_string()),
                ("to", "Shanghai".to_string()),
                ("date", "06-01".to_string()),
                ("sort", "time".to_string()),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn transfer_search_hits_transfer_path() {
        let req = search_transfers("Beijing", "Shanghai", "2024-06-01", "cost");
        assert_eq!(req.path, "/transfer");
        assert_eq!(req.query.last(), Some(&("sort", "cost".to_string())));
    }

    #[test]
    fn session_endpoints() {
        let req = login("alice", "secret");
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/sessions");
        assert_eq!(req.body.as_ref().unwrap()["username"], "alice");

        let req = logout("alice");
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/sessions/alice");

        let req = profile("alice");
        assert_eq!(req.path, "/users/alice");
        assert_eq!(req.query, vec![("cur", "alice".to_string())]);
    }

    #[test]
    fn buy_transcodes_date_and_carries_queue_flag() {
        let req = buy("alice", "G1234", "2024-06-01", 2, "Beijing", "Shanghai", true);
        assert_eq!(req.path, "/orders/alice/buy");
        let body = req.body.unwrap();
        assert_eq!(body["date"], "06-01");
        assert_eq!(body["num"], 2);
        assert_eq!(body["queue"], true);
    }

    #[test]
    fn refund_is_one_based_from_list_top() {
        let req = refund("alice", 1);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/orders/alice/refund");
        assert_eq!(req.body.unwrap()["index"], 1);
    }

    #[test]
    fn admin_endpoints() {
        assert_eq!(add_train(&TrainSpec::default()).path, "/trains");
        let req = delete_train("G1234");
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/trains/G1234");
        let req = release_train("G1234");
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/trains/G1234/release");
        assert_eq!(clean_system().path, "/system/clean");
        assert_eq!(exit_system().path, "/system/exit");
    }
}
