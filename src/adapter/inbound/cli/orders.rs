//! Handler for `orders`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::OrdersArgs;
use crate::adapter::inbound::cli::{cache, display, output};
use crate::domain::Order;
use crate::error::Result;

const ITEMS_WIDTH: usize = 40;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Restaurant")]
    restaurant: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Placed")]
    placed: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Items")]
    items: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            restaurant: display::restaurant(&order.restaurant).to_string(),
            status: order.status.clone(),
            placed: display::datetime(order.placed_at),
            total: order.total.clone(),
            items: display::truncate(&display::items(&order.items), ITEMS_WIDTH),
        }
    }
}

/// Execute `orders`.
pub async fn execute(args: OrdersArgs) -> Result<()> {
    if output::is_silent() {
        return Ok(());
    }

    let orders = cache::load_orders().await?;
    let total = orders.len();
    let shown = if args.limit == 0 {
        &orders[..]
    } else {
        &orders[..args.limit.min(total)]
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "orders",
            "total": total,
            "orders": shown,
        }));
        return Ok(());
    }

    if shown.is_empty() {
        output::note("No orders stored.");
        return Ok(());
    }

    let table = Table::new(shown.iter().map(OrderRow::from)).to_string();
    output::lines(&table);
    if shown.len() < total {
        output::hint(&format!(
            "showing {} of {total}; pass --limit 0 to list all",
            shown.len()
        ));
    }
    Ok(())
}
