// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use storelens::commands::trend::{self, MOVING_AVG_WINDOW};
use storelens::kpi::Metric;
use storelens::models::Order;

fn order(id: &str, date: &str, sales: i64, profit: i64, quantity: u32) -> Order {
    Order {
        order_id: id.to_string(),
        order_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        ship_date: None,
        sales: Decimal::from(sales),
        profit: Decimal::from(profit),
        quantity,
        product_name: "Stapler".into(),
        category: "Office Supplies".into(),
        sub_category: "Fasteners".into(),
        segment: "Consumer".into(),
        region: "East".into(),
        state: "New York".into(),
        returned: false,
    }
}

#[test]
fn orders_bucket_by_calendar_month() {
    let orders = vec![
        order("A", "2017-01-05", 100, 10, 1),
        order("B", "2017-01-20", 50, 5, 1),
        order("C", "2017-02-10", 200, 20, 1),
        order("D", "2017-04-01", 25, 5, 1),
    ];
    let rows: Vec<&Order> = orders.iter().collect();
    let points = trend::monthly_series(&rows, Metric::Sales, None);

    let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
    // March has no orders and therefore no bucket
    assert_eq!(months, vec!["2017-01", "2017-02", "2017-04"]);
    assert_eq!(points[0].value, Decimal::from(150));
    assert_eq!(points[1].value, Decimal::from(200));
    assert_eq!(points[2].value, Decimal::from(25));
}

#[test]
fn rolling_mean_starts_after_full_window() {
    let orders = vec![
        order("A", "2017-01-05", 150, 0, 1),
        order("B", "2017-02-10", 200, 0, 1),
        order("C", "2017-03-15", 25, 0, 1),
    ];
    let rows: Vec<&Order> = orders.iter().collect();
    let points = trend::monthly_series(&rows, Metric::Sales, Some(MOVING_AVG_WINDOW));

    assert_eq!(points[0].moving_avg, None);
    assert_eq!(points[1].moving_avg, None);
    assert_eq!(points[2].moving_avg, Some(Decimal::from(125)));
}

#[test]
fn margin_metric_is_bucket_profit_over_bucket_sales() {
    let orders = vec![
        order("A", "2017-01-05", 150, 40, 1),
        order("B", "2017-01-20", 50, 10, 1),
    ];
    let rows: Vec<&Order> = orders.iter().collect();
    let points = trend::monthly_series(&rows, Metric::Margin, None);

    // 50 profit over 200 sales
    assert_eq!(points[0].value, Decimal::from(25));
}

#[test]
fn quantity_metric_sums_units() {
    let orders = vec![
        order("A", "2017-01-05", 100, 10, 3),
        order("B", "2017-01-20", 50, 5, 4),
    ];
    let rows: Vec<&Order> = orders.iter().collect();
    let points = trend::monthly_series(&rows, Metric::Quantity, None);
    assert_eq!(points[0].value, Decimal::from(7));
}

#[test]
fn empty_rows_yield_empty_series() {
    let points = trend::monthly_series(&[], Metric::Sales, Some(MOVING_AVG_WINDOW));
    assert!(points.is_empty());
}
