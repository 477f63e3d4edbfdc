//! Raw upstream order to canonical [`Order`].

use std::sync::OnceLock;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use regex::Regex;

use super::dto::{OrderEntity, OrdersResponse, ORDER_ENTITY};
use crate::domain::{Order, OrderItem};
use crate::port::outbound::OrderPage;

/// Upstream date layouts, tried in order. All are local wall-clock times.
const DATE_LAYOUTS: &[&str] = &[
    "%B %d, %Y at %I:%M %p",
    "%B %d, %Y %I:%M %p",
    "%b %d, %Y at %I:%M %p",
    "%b %d, %Y %I:%M %p",
    "%d %b %Y at %I:%M %p",
    "%d %b %Y %I:%M %p",
    "%Y-%m-%d %H:%M",
];

fn dish_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*(\d+)\s*x\s*(.+?)\s*$").expect("valid dish regex"))
}

/// Convert one response into a page of orders, in paging-section order.
///
/// Only `ORDER` entity lists are read; ids with no entry in the entity map
/// are skipped.
#[must_use]
pub fn page_from_response(resp: OrdersResponse) -> OrderPage {
    let section = resp.sections.order_history;
    let entities = resp.entities.orders;

    let orders = section
        .entities
        .iter()
        .filter(|refs| refs.entity_type == ORDER_ENTITY)
        .flat_map(|refs| refs.entity_ids.iter())
        .filter_map(|id| entities.get(&id.to_string()))
        .map(normalize_order)
        .collect();

    OrderPage {
        orders,
        total_pages: u32::try_from(section.total_pages).unwrap_or(0),
    }
}

/// Build the canonical order for one raw record.
#[must_use]
pub fn normalize_order(raw: &OrderEntity) -> Order {
    Order {
        id: raw.order_id.to_string(),
        restaurant: raw.res_info.name.trim().to_string(),
        status: resolve_status(raw),
        placed_at: parse_order_date(&raw.order_date),
        total: raw.total_cost.trim().to_string(),
        items: parse_items(&raw.dish_string),
    }
}

/// Delivery label, else delivery message, else "Status N" for a non-zero code.
fn resolve_status(raw: &OrderEntity) -> String {
    let label = raw.delivery_details.delivery_label.trim();
    if !label.is_empty() {
        return label.to_string();
    }
    let message = raw.delivery_details.delivery_message.trim();
    if !message.is_empty() {
        return message.to_string();
    }
    if raw.status != 0 {
        return format!("Status {}", raw.status);
    }
    String::new()
}

/// Parse an upstream date string. `None` when no layout matches.
#[must_use]
pub fn parse_order_date(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    for layout in DATE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, layout) {
            // Ambiguous local times (DST fold) take the earlier instant.
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Some(local);
            }
        }
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|at| at.with_timezone(&Local))
}

/// Split a dish string like `"2 x Burger, Fries"` into items.
///
/// The split is on every comma, so a name with an embedded comma becomes
/// several items.
#[must_use]
pub fn parse_items(dish_string: &str) -> Vec<OrderItem> {
    dish_string
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match dish_pattern().captures(part) {
            Some(caps) => {
                let quantity = caps[1].parse::<u32>().unwrap_or(1);
                OrderItem::new(caps[2].trim(), quantity)
            }
            None => OrderItem::new(part, 1),
        })
        .collect()
}
