//! Order history wire types.
//!
//! The orders endpoint returns a paging section listing entity ids, plus a
//! flat map from id to raw order fields:
//!
//! ```json
//! {
//!   "sections": {"SECTION_USER_ORDER_HISTORY": {
//!     "count": 12, "currentPage": 1, "totalPages": 2,
//!     "entities": [{"entity_type": "ORDER", "entity_ids": [101, 102]}]
//!   }},
//!   "entities": {"ORDER": {"101": {"orderId": 101, "totalCost": "₹250", ...}}}
//! }
//! ```
//!
//! Every field is optional on the wire; missing values decode as defaults.

use std::collections::HashMap;

use serde::Deserialize;

/// Entity type tag for orders in the paging section.
pub const ORDER_ENTITY: &str = "ORDER";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrdersResponse {
    pub sections: Sections,
    pub entities: Entities,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Sections {
    #[serde(rename = "SECTION_USER_ORDER_HISTORY")]
    pub order_history: OrderHistorySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderHistorySection {
    pub count: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub entities: Vec<EntityRefs>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntityRefs {
    pub entity_type: String,
    pub entity_ids: Vec<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Entities {
    #[serde(rename = "ORDER")]
    pub orders: HashMap<String, OrderEntity>,
}

/// One raw upstream order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderEntity {
    pub order_id: i64,
    pub total_cost: String,
    pub order_date: String,
    pub dish_string: String,
    pub hash_id: String,
    pub status: i64,
    pub payment_status: i64,
    pub delivery_details: DeliveryDetails,
    pub res_info: ResInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub delivery_label: String,
    pub delivery_message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResInfo {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_payload() {
        let json = r#"{
            "sections": {"SECTION_USER_ORDER_HISTORY": {
                "count": 1, "currentPage": 1, "totalPages": 3,
                "entities": [{"entity_type": "ORDER", "entity_ids": [101]}]
            }},
            "entities": {"ORDER": {"101": {
                "orderId": 101,
                "totalCost": "₹250.00",
                "orderDate": "March 5, 2024 at 07:30 PM",
                "dishString": "1 x Paneer Roll",
                "deliveryDetails": {"deliveryLabel": "Delivered"},
                "resInfo": {"name": "Roll Co"}
            }}}
        }"#;
        let resp: OrdersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.sections.order_history.total_pages, 3);
        let refs = &resp.sections.order_history.entities[0];
        assert_eq!(refs.entity_type, ORDER_ENTITY);
        assert_eq!(refs.entity_ids, vec![101]);
        let raw = &resp.entities.orders["101"];
        assert_eq!(raw.res_info.name, "Roll Co");
        assert_eq!(raw.delivery_details.delivery_label, "Delivered");
        assert!(raw.hash_id.is_empty());
    }

    #[test]
    fn empty_object_decodes() {
        let resp: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.sections.order_history.total_pages, 0);
        assert!(resp.entities.orders.is_empty());
    }
}
