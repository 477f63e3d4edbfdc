//! Builders for orders used across tests.
//!
//! `order("42").restaurant("Dosa Point").item("Masala Dosa", 2).total("₹180")`
//! reads better in a test than a struct literal with six fields.

use chrono::{DateTime, Local, TimeZone};

use crate::domain::{Order, OrderItem};

/// A local timestamp. Panics on nonexistent local times (DST gaps).
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("unambiguous local time")
}

/// A delivered, undated order with no items and no total.
pub fn order(id: &str) -> Order {
    Order {
        id: id.to_string(),
        status: "Delivered".to_string(),
        ..Order::default()
    }
}

/// Like [`order`] but placed at `placed_at`.
pub fn dated_order(id: &str, placed_at: DateTime<Local>) -> Order {
    order(id).placed(placed_at)
}

/// A delivered single-item order, the shape price tracking looks for.
pub fn single_item(
    id: &str,
    restaurant: &str,
    item: &str,
    quantity: u32,
    total: &str,
    placed_at: DateTime<Local>,
) -> Order {
    dated_order(id, placed_at)
        .restaurant(restaurant)
        .item(item, quantity)
        .total(total)
}

/// Chainable setters for [`Order`] fixtures.
pub trait OrderFixture: Sized {
    fn restaurant(self, name: &str) -> Self;
    fn status(self, status: &str) -> Self;
    fn total(self, total: &str) -> Self;
    fn item(self, name: &str, quantity: u32) -> Self;
    fn placed(self, placed_at: DateTime<Local>) -> Self;
}

impl OrderFixture for Order {
    fn restaurant(mut self, name: &str) -> Self {
        self.restaurant = name.to_string();
        self
    }

    fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    fn total(mut self, total: &str) -> Self {
        self.total = total.to_string();
        self
    }

    fn item(mut self, name: &str, quantity: u32) -> Self {
        self.items.push(OrderItem::new(name, quantity));
        self
    }

    fn placed(mut self, placed_at: DateTime<Local>) -> Self {
        self.placed_at = Some(placed_at);
        self
    }
}
