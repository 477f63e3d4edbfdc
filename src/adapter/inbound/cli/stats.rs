//! Handler for `stats`.
//!
//! `basic` prints period groups and the summary. The other views add
//! weekday spend, ordering patterns or favourites; `all` prints every section
//! except the basic hint.

use serde_json::{json, Map, Value};
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{StatsArgs, StatsView};
use crate::adapter::inbound::cli::{cache, display, output};
use crate::application::analytics::{
    compute_summary, group_orders_by, orders_by_time_window, orders_by_weekday, spend_by_weekday,
    top_items, top_restaurants,
};
use crate::domain::{Bucket, PeriodGroup, SpendBucket, Summary};
use crate::error::Result;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Orders")]
    orders: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Average")]
    average: String,
}

#[derive(Tabled)]
struct SpendRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Orders")]
    orders: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Average")]
    average: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Orders")]
    orders: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Execute `stats`.
pub async fn execute(args: StatsArgs) -> Result<()> {
    if output::is_silent() {
        return Ok(());
    }

    let orders = cache::load_orders().await?;
    let summary = compute_summary(&orders);
    let view = args.view;

    let groups = if view.includes(StatsView::Basic) || view.includes(StatsView::Spend) {
        Some(group_orders_by(&orders, &args.group)?)
    } else {
        None
    };
    let show_spend = view.includes(StatsView::Spend);
    let show_patterns = view.includes(StatsView::Patterns);
    let show_personal = view.includes(StatsView::Personal);

    if output::is_json() {
        let mut body = Map::new();
        body.insert("command".into(), json!("stats"));
        body.insert("summary".into(), json!(summary));
        if let Some(groups) = &groups {
            body.insert("group".into(), json!(args.group.trim().to_lowercase()));
            body.insert("groups".into(), json!(groups));
        }
        if show_spend {
            body.insert("spend_by_weekday".into(), json!(spend_by_weekday(&orders)));
        }
        if show_patterns {
            body.insert("orders_by_weekday".into(), json!(orders_by_weekday(&orders)));
            body.insert("orders_by_time".into(), json!(orders_by_time_window(&orders)));
        }
        if show_personal {
            body.insert("top_restaurants".into(), json!(top_restaurants(&orders, args.top)));
            body.insert("top_items".into(), json!(top_items(&orders, args.top)));
        }
        output::json_output(Value::Object(body));
        return Ok(());
    }

    if let Some(groups) = &groups {
        print_groups(groups, &summary.currency);
        print_summary(&summary);
    }

    if view == StatsView::Basic {
        output::hint("more views: zocli stats --view spend | patterns | personal");
        return Ok(());
    }

    if show_spend {
        output::section("Spend by weekday");
        print_spend(&spend_by_weekday(&orders), &summary.currency);
    }

    if show_patterns {
        output::section("Ordering patterns");
        output::note("By weekday");
        print_shares(&orders_by_weekday(&orders));
        output::note("By time of day");
        print_shares(&orders_by_time_window(&orders));
    }

    if show_personal {
        output::section("Personal stats");
        output::note("Top restaurants");
        print_shares(&top_restaurants(&orders, args.top));
        let items = top_items(&orders, args.top);
        if items.is_empty() {
            output::note("No item data to display.");
        } else {
            output::note("Top items");
            print_shares(&items);
        }
    }

    Ok(())
}

fn print_groups(groups: &[PeriodGroup], currency: &str) {
    let rows = groups.iter().map(|group| GroupRow {
        period: group.key.clone(),
        orders: group.count,
        total: display::money(currency, group.total),
        average: display::money(currency, group.average),
    });
    output::lines(&Table::new(rows).to_string());
}

fn print_summary(summary: &Summary) {
    output::section("Summary");
    output::field("Orders", summary.count);
    output::field(
        "Total spent",
        output::highlight(display::money(&summary.currency, summary.total)),
    );
    output::field(
        "Average",
        display::money(&summary.currency, summary.average),
    );
    output::field(
        "Range",
        format!(
            "{} to {}",
            display::date(summary.earliest),
            display::date(summary.latest)
        ),
    );
}

fn print_spend(buckets: &[SpendBucket], currency: &str) {
    let rows = buckets.iter().map(|bucket| SpendRow {
        day: bucket.key.clone(),
        orders: bucket.count,
        total: display::money(currency, bucket.total),
        average: display::money(currency, bucket.average),
    });
    output::lines(&Table::new(rows).to_string());
}

fn print_shares(buckets: &[Bucket]) {
    let rows = buckets.iter().map(|bucket| ShareRow {
        name: display::truncate(&bucket.key, 40),
        orders: bucket.count,
        share: display::share(bucket.percent),
    });
    output::lines(&Table::new(rows).to_string());
}
