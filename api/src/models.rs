//! Client-side view models mirroring the ticketing server's JSON.
//!
//! These types are transient: created when a response is decoded, held in
//! memory (or persisted as a session snapshot via the `store` crate), and
//! discarded on logout or page reload. The client does not own or validate
//! them beyond what is needed to render.

use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub name: String,
    #[serde(rename = "mailAddr")]
    pub mail_addr: String,
    pub privilege: i64,
}

/// Fields posted to `POST /users` when registering an account.
///
/// `cur_username` is the registering operator; it is empty for the very first
/// account, which the server treats specially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub cur_username: String,
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(rename = "mailAddr")]
    pub mail_addr: String,
    pub privilege: i64,
}

/// One entry of the user's order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "trainID")]
    pub train_id: String,
    pub from_station_name: String,
    pub to_station_name: String,
    #[serde(rename = "departureFromStation")]
    pub departure: String,
    #[serde(rename = "arrivalAtStation")]
    pub arrival: String,
    pub price: i64,
    pub num: u32,
    pub status: String,
}

impl Order {
    /// Only successfully purchased orders can be refunded.
    pub fn refundable(&self) -> bool {
        self.status == "success"
    }
}

/// Train description serialized verbatim to `POST /trains`.
///
/// Stations, prices and times are pipe-delimited strings; the server is the
/// one that checks the counts line up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainSpec {
    #[serde(rename = "trainID")]
    pub train_id: String,
    #[serde(rename = "stationNum")]
    pub station_num: u32,
    #[serde(rename = "seatNum")]
    pub seat_num: u32,
    pub stations: String,
    pub prices: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "travelTimes")]
    pub travel_times: String,
    #[serde(rename = "stopoverTimes")]
    pub stopover_times: String,
    #[serde(rename = "saleDate")]
    pub sale_date: String,
    #[serde(rename = "type")]
    pub train_type: String,
}

/// A single ticket record from the search endpoints.
///
/// The server sends an opaque multi-line string. The first line starts with
/// the train id followed by the train type; everything after the first line
/// is route detail, rendered as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub train_id: String,
    pub train_type: String,
    pub detail: Vec<String>,
    pub raw: String,
}

impl Ticket {
    pub fn parse(record: &str) -> Self {
        let mut lines = record.lines();
        let header = lines.next().unwrap_or_default();
        let mut fields = header.split_whitespace();
        let train_id = fields.next().unwrap_or_default().to_string();
        let train_type = fields.next().unwrap_or_default().to_string();
        Self {
            train_id,
            train_type,
            detail: lines.map(str::to_string).collect(),
            raw: record.to_string(),
        }
    }
}

/// Outcome of a purchase request.
///
/// The server's `result` field is either the literal string `"queue"` or the
/// total cost (a number, or a number formatted as a string).
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    Queued,
    Cost(String),
}

impl PurchaseOutcome {
    pub fn from_result(result: &serde_json::Value) -> Option<Self> {
        match result {
            serde_json::Value::String(s) if s == "queue" => Some(Self::Queued),
            serde_json::Value::String(s) => Some(Self::Cost(s.clone())),
            serde_json::Value::Number(n) => Some(Self::Cost(n.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_parse_splits_header_and_detail() {
        let record = "G1234 G\nBeijing 08:00 -> Shanghai 13:30\nprice 553 seats 120";
        let ticket = Ticket::parse(record);
        assert_eq!(ticket.train_id, "G1234");
        assert_eq!(ticket.train_type, "G");
        assert_eq!(ticket.detail.len(), 2);
        assert_eq!(ticket.detail[0], "Beijing 08:00 -> Shanghai 13:30");
        assert_eq!(ticket.raw, record);
    }

    #[test]
    fn ticket_parse_tolerates_bare_header() {
        let ticket = Ticket::parse("K512");
        assert_eq!(ticket.train_id, "K512");
        assert_eq!(ticket.train_type, "");
        assert!(ticket.detail.is_empty());
    }

    #[test]
    fn purchase_outcome_queue_vs_cost() {
        assert_eq!(
            PurchaseOutcome::from_result(&serde_json::json!("queue")),
            Some(PurchaseOutcome::Queued)
        );
        assert_eq!(
            PurchaseOutcome::from_result(&serde_json::json!(1660)),
            Some(PurchaseOutcome::Cost("1660".to_string()))
        );
        assert_eq!(
            PurchaseOutcome::from_result(&serde_json::json!("1660")),
            Some(PurchaseOutcome::Cost("1660".to_string()))
        );
        assert_eq!(PurchaseOutcome::from_result(&serde_json::Value::Null), None);
    }

    #[test]
    fn order_refundable_only_when_success() {
        let mut order: Order = serde_json::from_value(serde_json::json!({
            "trainID": "G1234",
            "from_station_name": "Beijing",
            "to_station_name": "Shanghai",
            "departureFromStation": "06-01 08:00",
            "arrivalAtStation": "06-01 13:30",
            "price": 553,
            "num": 2,
            "status": "success"
        }))
        .unwrap();
        assert!(order.refundable());
        order.status = "pending".to_string();
        assert!(!order.refundable());
        order.status = "refunded".to_string();
        assert!(!order.refundable());
    }

    #[test]
    fn train_spec_serializes_wire_casing() {
        let spec = TrainSpec {
            train_id: "G1234".to_string(),
            station_num: 3,
            seat_num: 100,
            stations: "Beijing|Nanjing|Shanghai".to_string(),
            prices: "300|253".to_string(),
            start_time: "08:00".to_string(),
            travel_times: "180|120".to_string(),
            stopover_times: "10".to_string(),
            sale_date: "06-01|08-17".to_string(),
            train_type: "G".to_string(),
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["trainID"], "G1234");
        assert_eq!(value["stationNum"], 3);
        assert_eq!(value["saleDate"], "06-01|08-17");
        assert_eq!(value["type"], "G");
    }
}
