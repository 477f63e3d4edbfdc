//! Canonical order entities.
//!
//! An [`Order`] is the storage-ready form of one upstream transaction. It is
//! produced once by the normalizer during sync, persisted as-is, and read
//! back unchanged by analytics.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// One completed or attempted transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Stable upstream identifier, used as the deduplication key.
    pub id: String,
    /// Restaurant name; empty when upstream omits it.
    #[serde(default)]
    pub restaurant: String,
    /// Upstream delivery status text, preserved verbatim.
    #[serde(default)]
    pub status: String,
    /// When the order was placed. `None` when the upstream date was unparseable.
    #[serde(default, deserialize_with = "deserialize_placed_at")]
    pub placed_at: Option<DateTime<Local>>,
    /// Raw upstream price text, currency marker included.
    #[serde(default)]
    pub total: String,
    /// Line items in upstream order.
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<OrderItem>,
}

/// A single line item of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
}

impl OrderItem {
    /// Create an item, normalizing a zero quantity to 1.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.max(1),
        }
    }
}

impl Order {
    /// True when the order carries a usable timestamp.
    #[must_use]
    pub fn is_dated(&self) -> bool {
        self.placed_at.is_some()
    }
}

/// Older caches encode an unknown date as the zero time literal rather than null.
const LEGACY_ZERO_TIME_YEAR: i32 = 1;

fn deserialize_placed_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let parsed = DateTime::parse_from_rfc3339(raw).map_err(serde::de::Error::custom)?;
    if chrono::Datelike::year(&parsed) <= LEGACY_ZERO_TIME_YEAR {
        return Ok(None);
    }
    Ok(Some(parsed.with_timezone(&Local)))
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<OrderItem>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct RawItem {
        #[serde(default)]
        name: String,
        #[serde(default)]
        quantity: i64,
    }

    let raw: Option<Vec<RawItem>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let quantity = u32::try_from(item.quantity).unwrap_or(0);
            OrderItem::new(item.name, quantity)
        })
        .collect())
}
