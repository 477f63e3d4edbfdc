//! Analytics properties over realistic collections.

use zocli::adapter::outbound::sample::sample_orders;
use zocli::application::analytics::{
    busiest, calculate_inflation, compute_summary, find_top_inflation_trends, group_orders,
    orders_by_time_window, orders_by_weekday, spend_by_weekday, suggest_restaurant, top_items,
    top_restaurants, year_in_review, GroupMode,
};
use zocli::domain::{parse_amount, Order};
use zocli::testkit::{at, dated_order, order, single_item, OrderFixture};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn mixed_orders() -> Vec<Order> {
    vec![
        dated_order("1", at(2023, 11, 3, 20, 0)).total("₹1,250.50"),
        dated_order("2", at(2024, 1, 7, 13, 0)).total("Rs. 300"),
        dated_order("3", at(2024, 1, 21, 9, 30)).total("$12.25"),
        order("4").total("garbage"),
        order("5").total("₹99"),
        dated_order("6", at(2024, 2, 29, 23, 59)).total("450 INR"),
    ]
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn ungrouped_total_matches_sum_of_parsed_amounts() {
    let orders = mixed_orders();
    let expected: f64 = orders.iter().map(|o| parse_amount(&o.total).0).sum();

    let groups = group_orders(&orders, GroupMode::None);

    assert_eq!(groups.len(), 1);
    assert_close(groups[0].total, expected);
    assert_close(compute_summary(&orders).total, expected);
}

#[test]
fn grouping_does_not_depend_on_input_order() {
    let orders = mixed_orders();
    let mut reversed = orders.clone();
    reversed.reverse();

    for mode in [GroupMode::None, GroupMode::Month, GroupMode::Year] {
        let forward = group_orders(&orders, mode);
        let backward = group_orders(&reversed, mode);
        assert_eq!(forward.len(), backward.len(), "{mode}");
        for (a, b) in forward.iter().zip(&backward) {
            assert_eq!((&a.key, a.count), (&b.key, b.count), "{mode}");
            assert_close(a.total, b.total);
        }
    }
}

#[test]
fn monthly_totals_cover_every_order() {
    let orders = mixed_orders();
    let groups = group_orders(&orders, GroupMode::Month);

    let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["Nov 2023", "Jan 2024", "Feb 2024", "unknown"]);
    assert_eq!(groups.iter().map(|g| g.count).sum::<usize>(), orders.len());
    let unknown = groups.last().unwrap();
    assert_eq!(unknown.count, 2);
    assert_close(unknown.total, 99.0);
}

#[test]
fn repeated_dish_price_rise_is_reported() {
    let orders = vec![
        single_item("b", "Slice", "Pizza", 2, "₹240", at(2024, 2, 1, 20, 0)),
        single_item("a", "Slice", "Pizza", 1, "₹100", at(2024, 1, 1, 20, 0)),
    ];

    let points = calculate_inflation(&orders, "pizza");
    let observed: Vec<_> = points.iter().map(|p| (p.unit_price, p.change)).collect();
    assert_eq!(observed, [(100.0, 0.0), (120.0, 20.0)]);
}

#[test]
fn new_restaurant_starts_without_change() {
    let orders = vec![
        single_item("1", "Old Place", "Tea", 1, "₹10", at(2024, 1, 1, 9, 0)),
        single_item("2", "Old Place", "Tea", 1, "₹15", at(2024, 1, 2, 9, 0)),
        single_item("3", "New Place", "Tea", 1, "₹40", at(2024, 1, 3, 9, 0)),
    ];

    let points = calculate_inflation(&orders, "");
    assert_eq!(points[1].change, 50.0);
    assert_eq!(points[2].change, 0.0);
}

#[test]
fn single_observations_never_form_trends() {
    let orders = vec![
        single_item("1", "A", "Tea", 1, "₹10", at(2024, 1, 1, 9, 0)),
        single_item("2", "A", "Tea", 1, "₹12", at(2024, 1, 2, 9, 0)),
        single_item("3", "A", "Coffee", 1, "₹30", at(2024, 1, 3, 9, 0)),
    ];

    let trends = find_top_inflation_trends(&orders, 5);
    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].item, "Tea");
}

#[test]
fn sample_history_supports_every_view() {
    let orders = sample_orders().unwrap();

    let summary = compute_summary(&orders);
    assert_eq!(summary.count, orders.len());
    assert_eq!(summary.currency, "₹");

    assert!(!find_top_inflation_trends(&orders, 5).is_empty());
    assert_eq!(top_restaurants(&orders, 3).len(), 3);
    assert!(!top_items(&orders, 5).is_empty());

    let weekdays = orders_by_weekday(&orders);
    assert_eq!(weekdays.len(), 7);
    let dated = orders.iter().filter(|o| o.placed_at.is_some()).count();
    assert_eq!(weekdays.iter().map(|b| b.count).sum::<usize>(), dated);
    assert_eq!(orders_by_time_window(&orders).len(), 4);
    assert_eq!(spend_by_weekday(&orders).len(), 7);
    assert!(busiest(&weekdays).is_some());
}

#[test]
fn seeded_suggestion_is_reproducible() {
    let orders = sample_orders().unwrap();

    let first = suggest_restaurant(&orders, &mut StdRng::seed_from_u64(42));
    let second = suggest_restaurant(&orders, &mut StdRng::seed_from_u64(42));

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn year_in_review_only_counts_that_year() {
    let orders = vec![
        dated_order("1", at(2023, 12, 31, 23, 0))
            .restaurant("Late Night Rolls")
            .total("₹200"),
        dated_order("2", at(2024, 3, 8, 20, 0))
            .restaurant("Biryani Blues")
            .item("Biryani", 1)
            .total("₹350"),
        dated_order("3", at(2024, 3, 15, 20, 30))
            .restaurant("Biryani Blues")
            .item("Biryani", 1)
            .total("₹380"),
        order("4").restaurant("Ghost Kitchen").total("₹999"),
    ];

    let review = year_in_review(&orders, 2024);

    assert_eq!(review.summary.count, 2);
    assert_close(review.summary.total, 730.0);
    assert_eq!(review.top_restaurant.unwrap().key, "Biryani Blues");
    assert_eq!(review.top_item.unwrap().count, 2);
    assert_eq!(review.most_expensive.unwrap().order.id, "3");
    assert_eq!(review.busiest_weekday.as_deref(), Some("Friday"));
    assert_eq!(review.busiest_time.as_deref(), Some("Evening (18-23)"));
}
