//! Order history export formats.

use crate::domain::Order;
use crate::error::Result;

const CSV_HEADER: &str = "Order ID,Restaurant,Date,Status,Total,Items";
const CSV_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row per order. Items read `2x Naan; 1x Dal`; undated orders leave Date empty.
#[must_use]
pub fn orders_to_csv(orders: &[Order]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for order in orders {
        let date = order
            .placed_at
            .map(|at| at.format(CSV_DATE_FORMAT).to_string())
            .unwrap_or_default();
        let items = order
            .items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join("; ");

        let record = [
            order.id.as_str(),
            order.restaurant.as_str(),
            date.as_str(),
            order.status.as_str(),
            order.total.as_str(),
            items.as_str(),
        ];
        let fields: Vec<String> = record.iter().map(|field| csv_field(field)).collect();
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }
    csv
}

/// Pretty JSON in the same shape as the order cache.
pub fn orders_to_json(orders: &[Order]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(orders)?;
    json.push('\n');
    Ok(json)
}

/// Quote a field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{at, dated_order, order, OrderFixture};

    #[test]
    fn csv_rows_follow_header() {
        let orders = vec![
            dated_order("7", at(2024, 5, 1, 13, 30))
                .restaurant("Chaayos")
                .total("₹250")
                .item("Masala Chai", 2)
                .item("Bun Maska", 1),
            order("8").restaurant("").total("Rs. 150"),
        ];
        let csv = orders_to_csv(&orders);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Order ID,Restaurant,Date,Status,Total,Items");
        assert_eq!(
            lines[1],
            "7,Chaayos,2024-05-01 13:30:00,Delivered,₹250,2x Masala Chai; 1x Bun Maska"
        );
        assert_eq!(lines[2], "8,,,Delivered,Rs. 150,");
    }

    #[test]
    fn csv_quotes_special_fields() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("Burgers, Fries"), "\"Burgers, Fries\"");
        assert_eq!(csv_field("The \"Good\" Place"), "\"The \"\"Good\"\" Place\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn json_export_reads_back_as_cache() {
        let orders = vec![dated_order("1", at(2024, 1, 2, 3, 4)).item("Dosa", 1)];
        let json = orders_to_json(&orders).unwrap();
        let decoded: Vec<Order> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, orders);
    }
}
