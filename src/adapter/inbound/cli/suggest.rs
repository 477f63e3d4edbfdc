//! Handler for `suggest`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use crate::adapter::inbound::cli::command::SuggestArgs;
use crate::adapter::inbound::cli::{cache, display, output};
use crate::application::analytics::suggest_restaurant;
use crate::error::Result;

/// Execute `suggest`.
pub async fn execute(args: SuggestArgs) -> Result<()> {
    if output::is_silent() {
        return Ok(());
    }

    let orders = cache::load_orders().await?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let suggestion = suggest_restaurant(&orders, &mut rng);

    if output::is_json() {
        output::json_output(json!({
            "command": "suggest",
            "suggestion": suggestion,
        }));
        return Ok(());
    }

    let Some(suggestion) = suggestion else {
        output::note("Nothing to suggest yet: no restaurant names in the order history.");
        return Ok(());
    };

    output::success(&format!(
        "Order from {}",
        output::highlight(display::restaurant(&suggestion.restaurant))
    ));
    output::field("Ordered", format!("{} times", suggestion.order_count));
    if let Some(item) = &suggestion.item {
        output::field("Usual pick", item);
    }
    Ok(())
}
