//! Handler for `wrapped`: one year of ordering in a handful of lines.

use chrono::{Datelike, Local};
use serde_json::json;

use crate::adapter::inbound::cli::command::WrappedArgs;
use crate::adapter::inbound::cli::{cache, display, output};
use crate::application::analytics::{latest_year, year_in_review};
use crate::domain::YearInReview;
use crate::error::Result;

/// Execute `wrapped`.
pub async fn execute(args: WrappedArgs) -> Result<()> {
    if output::is_silent() {
        return Ok(());
    }

    let orders = cache::load_orders().await?;
    let year = args
        .year
        .or_else(|| latest_year(&orders))
        .unwrap_or_else(|| Local::now().year());
    let review = year_in_review(&orders, year);

    if output::is_json() {
        output::json_output(json!({
            "command": "wrapped",
            "review": review,
        }));
        return Ok(());
    }

    print_review(&review);
    Ok(())
}

fn print_review(review: &YearInReview) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Your {} in food", review.year));

    let summary = &review.summary;
    if summary.count == 0 {
        output::note(&format!("No orders placed in {}.", review.year));
        return;
    }

    output::field("Orders", summary.count);
    output::field(
        "Total spent",
        output::highlight(display::money(&summary.currency, summary.total)),
    );
    output::field("Average", display::money(&summary.currency, summary.average));

    if let Some(top) = &review.top_restaurant {
        output::field(
            "Top restaurant",
            format!("{} ({} orders)", top.key, top.count),
        );
    }
    if let Some(top) = &review.top_item {
        output::field("Top dish", format!("{} (x{})", top.key, top.count));
    }
    if let Some(expensive) = &review.most_expensive {
        output::field(
            "Biggest order",
            format!(
                "{} at {} on {}",
                display::money(&summary.currency, expensive.amount),
                display::restaurant(&expensive.order.restaurant),
                display::date(expensive.order.placed_at)
            ),
        );
    }
    if let Some(day) = &review.busiest_weekday {
        output::field("Busiest day", day);
    }
    if let Some(window) = &review.busiest_time {
        output::field("Busiest time", window);
    }
}
