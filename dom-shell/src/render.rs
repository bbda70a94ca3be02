//! HTML fragments injected into the page via `innerHTML`.
//!
//! Server-provided strings are escaped before they land in markup; the
//! builders themselves are plain string functions so they can be unit-tested
//! on any target.

use api::{Order, Profile, Ticket};

/// Minimal HTML escaping for text interpolated into fragments.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One search result card. The buy button is a placeholder element the shell
/// attaches a listener to (`data-train-id` carries the selection); logged-out
/// visitors get a hint instead.
pub fn ticket_card(ticket: &Ticket, logged_in: bool) -> String {
    let detail = ticket
        .detail
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>");
    let action = if logged_in {
        format!(
            r#"<button class="btn primary buy-btn" data-train-id="{}">Buy Ticket</button>"#,
            escape(&ticket.train_id)
        )
    } else {
        r#"<span class="login-hint">Login to buy</span>"#.to_string()
    };
    format!(
        concat!(
            r#"<div class="ticket-card">"#,
            r#"<div class="ticket-header">"#,
            r#"<span class="train-id">{id}</span>"#,
            r#"<span class="train-type">{ty}</span>"#,
            r#"</div>"#,
            r#"<div class="ticket-details">{detail}</div>"#,
            r#"<div class="ticket-actions">{action}</div>"#,
            r#"</div>"#
        ),
        id = escape(&ticket.train_id),
        ty = escape(&ticket.train_type),
        detail = detail,
        action = action,
    )
}

pub fn ticket_list(tickets: &[Ticket], logged_in: bool) -> String {
    if tickets.is_empty() {
        return "<p>No results found.</p>".to_string();
    }
    tickets
        .iter()
        .map(|ticket| ticket_card(ticket, logged_in))
        .collect()
}

/// One order card; refundable orders get a refund button carrying the
/// 1-based list position.
pub fn order_card(order: &Order, index: usize) -> String {
    let refund = if order.refundable() {
        format!(
            r#"<div class="ticket-actions"><button class="btn danger refund-btn" data-index="{}">Refund</button></div>"#,
            index + 1
        )
    } else {
        String::new()
    };
    format!(
        concat!(
            r#"<div class="order-card">"#,
            r#"<div class="order-header">"#,
            r#"<span class="train-id">{id}</span>"#,
            r#"<span class="order-status {status}">{status}</span>"#,
            r#"</div>"#,
            r#"<div class="order-details">"#,
            r#"<div><strong>From:</strong> {from}</div>"#,
            r#"<div><strong>To:</strong> {to}</div>"#,
            r#"<div><strong>Departure:</strong> {dep}</div>"#,
            r#"<div><strong>Arrival:</strong> {arr}</div>"#,
            r#"<div><strong>Tickets:</strong> {num}</div>"#,
            r#"<div><strong>Price:</strong> ${price}</div>"#,
            r#"</div>"#,
            "{refund}",
            r#"</div>"#
        ),
        id = escape(&order.train_id),
        status = escape(&order.status),
        from = escape(&order.from_station_name),
        to = escape(&order.to_station_name),
        dep = escape(&order.departure),
        arr = escape(&order.arrival),
        num = order.num,
        price = order.price,
        refund = refund,
    )
}

pub fn order_list(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "<p>No orders found.</p>".to_string();
    }
    orders
        .iter()
        .enumerate()
        .map(|(index, order)| order_card(order, index))
        .collect()
}

pub fn profile_card(profile: &Profile) -> String {
    format!(
        concat!(
            r#"<div class="profile-card">"#,
            r#"<h3>User Profile</h3>"#,
            r#"<div class="profile-info">"#,
            r#"<div class="info-item"><div class="info-label">Username</div><div class="info-value">{username}</div></div>"#,
            r#"<div class="info-item"><div class="info-label">Name</div><div class="info-value">{name}</div></div>"#,
            r#"<div class="info-item"><div class="info-label">Email</div><div class="info-value">{mail}</div></div>"#,
            r#"<div class="info-item"><div class="info-label">Privilege Level</div><div class="info-value">{privilege}</div></div>"#,
            r#"</div>"#,
            r#"</div>"#
        ),
        username = escape(&profile.username),
        name = escape(&profile.name),
        mail = escape(&profile.mail_addr),
        privilege = profile.privilege,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(status: &str) -> Order {
        Order {
            train_id: "G1234".to_string(),
            from_station_name: "Beijing".to_string(),
            to_station_name: "Shanghai".to_string(),
            departure: "06-01 08:00".to_string(),
            arrival: "06-01 13:30".to_string(),
            price: 553,
            num: 2,
            status: status.to_string(),
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape("Beijing"), "Beijing");
    }

    #[test]
    fn ticket_card_offers_buy_only_when_logged_in() {
        let ticket = Ticket::parse("G1234 G\nBeijing -> Shanghai");
        let html = ticket_card(&ticket, true);
        assert!(html.contains(r#"data-train-id="G1234""#));
        assert!(html.contains("Buy Ticket"));

        let html = ticket_card(&ticket, false);
        assert!(!html.contains("buy-btn"));
        assert!(html.contains("Login to buy"));
    }

    #[test]
    fn ticket_card_escapes_server_strings() {
        let ticket = Ticket::parse("<script> X\ndetail");
        let html = ticket_card(&ticket, true);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_ticket_list_renders_placeholder() {
        assert_eq!(ticket_list(&[], true), "<p>No results found.</p>");
    }

    #[test]
    fn refund_button_is_one_based_and_success_only() {
        let orders = vec![sample_order("success"), sample_order("pending")];
        let html = order_list(&orders);
        assert!(html.contains(r#"data-index="1""#));
        // The pending order at position 2 must not offer a refund.
        assert!(!html.contains(r#"data-index="2""#));
        assert_eq!(html.matches("refund-btn").count(), 1);
    }

    #[test]
    fn profile_card_lists_all_fields() {
        let profile = Profile {
            username: "alice".to_string(),
            name: "Alice".to_string(),
            mail_addr: "alice@example.com".to_string(),
            privilege: 10,
        };
        let html = profile_card(&profile);
        assert!(html.contains("alice"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("10"));
    }
}
