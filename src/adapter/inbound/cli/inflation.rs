//! Handler for `inflation`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::InflationArgs;
use crate::adapter::inbound::cli::{cache, display, output};
use crate::application::analytics::{calculate_inflation, find_top_inflation_trends};
use crate::domain::{InflationTrend, ItemPricePoint};
use crate::error::Result;

const NAME_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 48;

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "First seen")]
    first_seen: String,
    #[tabled(rename = "First price")]
    first_price: String,
    #[tabled(rename = "Last price")]
    last_price: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Restaurant")]
    restaurant: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Unit price")]
    unit_price: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Execute `inflation`.
pub async fn execute(args: InflationArgs) -> Result<()> {
    if output::is_silent() {
        return Ok(());
    }

    let orders = cache::load_orders().await?;
    let query = args.query.join(" ");

    if query.trim().is_empty() {
        let trends = find_top_inflation_trends(&orders, args.limit);
        if output::is_json() {
            output::json_output(json!({
                "command": "inflation.trends",
                "trends": trends,
            }));
            return Ok(());
        }
        print_trends(&trends);
        return Ok(());
    }

    let points = calculate_inflation(&orders, &query);
    if output::is_json() {
        output::json_output(json!({
            "command": "inflation.history",
            "query": query.trim(),
            "points": points,
        }));
        return Ok(());
    }
    print_points(&points);
    Ok(())
}

fn print_trends(trends: &[InflationTrend]) {
    output::section("Top inflation trends (per restaurant)");
    if trends.is_empty() {
        output::note("No dish was ordered on its own more than once.");
        return;
    }

    let rows = trends.iter().map(|trend| TrendRow {
        item: display::truncate(&trend.label(), LABEL_WIDTH),
        first_seen: display::date(trend.first_seen),
        first_price: display::money(&trend.currency, trend.first_price),
        last_price: display::money(&trend.currency, trend.last_price),
        change: display::change(trend.total_change),
    });
    output::lines(&Table::new(rows).to_string());
    output::hint("run `zocli inflation <dish name>` for the full price history");
}

fn print_points(points: &[ItemPricePoint]) {
    if points.is_empty() {
        output::note("No matching orders found (only delivered single-dish orders are priced).");
        return;
    }

    let rows = points.iter().map(|point| PointRow {
        date: display::date(point.placed_at),
        restaurant: display::restaurant(&point.restaurant).to_string(),
        item: display::truncate(&point.item, NAME_WIDTH),
        unit_price: display::money(&point.currency, point.unit_price),
        change: display::change(point.change),
    });
    output::lines(&Table::new(rows).to_string());

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if points.len() > 1 && first.unit_price > 0.0 {
            let overall = (last.unit_price - first.unit_price) / first.unit_price * 100.0;
            let text = display::change(overall);
            let text = if overall > 0.0 {
                output::negative(text)
            } else {
                output::positive(text)
            };
            output::field("Overall", text);
        }
    }
}
