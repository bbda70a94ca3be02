//! Response envelopes.
//!
//! Every reply from the ticketing API is a JSON object carrying a numeric
//! `status`: `0` means the operation succeeded, anything else is a
//! server-defined rejection. No other field of a rejected reply is
//! interpreted.

use serde::Deserialize;

use crate::models::{Order, Profile, PurchaseOutcome, Ticket};
use crate::ApiError;

pub(crate) trait Envelope {
    fn status(&self) -> i64;
}

/// Reject non-zero-status envelopes, pass the rest through.
pub(crate) fn accept<T: Envelope>(reply: T) -> Result<T, ApiError> {
    match reply.status() {
        0 => Ok(reply),
        status => Err(ApiError::Rejected { status }),
    }
}

macro_rules! envelope {
    ($ty:ty) => {
        impl Envelope for $ty {
            fn status(&self) -> i64 {
                self.status
            }
        }
    };
}

/// A bare acknowledgement with no payload.
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    pub status: i64,
}
envelope!(Ack);

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileReply {
    pub status: i64,
    pub profile: Option<Profile>,
}
envelope!(ProfileReply);

#[derive(Debug, Deserialize)]
pub(crate) struct TicketsReply {
    pub status: i64,
    #[serde(default)]
    pub ticket_list: Vec<String>,
}
envelope!(TicketsReply);

impl TicketsReply {
    /// Parse the ticket records, dropping the leading list element.
    ///
    /// The server prefixes the list with a count row rather than a ticket;
    /// this is the single place that convention is compensated for.
    pub fn tickets(&self) -> Vec<Ticket> {
        self.ticket_list
            .iter()
            .skip(1)
            .map(|record| Ticket::parse(record))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransferReply {
    pub status: i64,
    #[serde(default)]
    pub transfer: Vec<String>,
}
envelope!(TransferReply);

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersReply {
    pub status: i64,
    #[serde(default)]
    pub orders: Vec<Order>,
}
envelope!(OrdersReply);

#[derive(Debug, Deserialize)]
pub(crate) struct BuyReply {
    pub status: i64,
    #[serde(default)]
    pub result: serde_json::Value,
}
envelope!(BuyReply);

impl BuyReply {
    pub fn outcome(&self) -> Result<PurchaseOutcome, ApiError> {
        PurchaseOutcome::from_result(&self.result).ok_or_else(|| {
            ApiError::Decode("purchase reply carried no usable result".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_status_is_rejected() {
        let reply: Ack = serde_json::from_str(r#"{"status": -1}"#).unwrap();
        match accept(reply) {
            Err(ApiError::Rejected { status }) => assert_eq!(status, -1),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn zero_status_passes() {
        let reply: Ack = serde_json::from_str(r#"{"status": 0}"#).unwrap();
        assert!(accept(reply).is_ok());
    }

    #[test]
    fn ticket_reply_drops_leading_count_row() {
        let reply: TicketsReply = serde_json::from_str(
            r#"{"status": 0, "ticket_list": ["2", "G1234 G\ndetail", "D5678 D\ndetail"]}"#,
        )
        .unwrap();
        let tickets = reply.tickets();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].train_id, "G1234");
        assert_eq!(tickets[1].train_id, "D5678");
    }

    #[test]
    fn empty_ticket_list_stays_empty() {
        let reply: TicketsReply = serde_json::from_str(r#"{"status": 0}"#).unwrap();
        assert!(reply.tickets().is_empty());
    }

    #[test]
    fn transfer_reply_defaults_to_empty() {
        let reply: TransferReply = serde_json::from_str(r#"{"status": 0}"#).unwrap();
        assert!(reply.transfer.is_empty());
    }

    #[test]
    fn orders_reply_decodes_wire_casing() {
        let reply: OrdersReply = serde_json::from_str(
            r#"{"status": 0, "orders": [{
                "trainID": "G1234",
                "from_station_name": "Beijing",
                "to_station_name": "Shanghai",
                "departureFromStation": "06-01 08:00",
                "arrivalAtStation": "06-01 13:30",
                "price": 553,
                "num": 1,
                "status": "pending"
            }]}"#,
        )
        .unwrap();
        assert_eq!(reply.orders.len(), 1);
        assert_eq!(reply.orders[0].train_id, "G1234");
        assert!(!reply.orders[0].refundable());
    }

    #[test]
    fn buy_reply_branches_on_queue_literal() {
        let reply: BuyReply =
            serde_json::from_str(r#"{"status": 0, "result": "queue"}"#).unwrap();
        assert_eq!(reply.outcome().unwrap(), PurchaseOutcome::Queued);

        let reply: BuyReply = serde_json::from_str(r#"{"status": 0, "result": 553}"#).unwrap();
        assert_eq!(
            reply.outcome().unwrap(),
            PurchaseOutcome::Cost("553".to_string())
        );

        let reply: BuyReply = serde_json::from_str(r#"{"status": 0}"#).unwrap();
        assert!(reply.outcome().is_err());
    }
}
