// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use storelens::commands::products;
use storelens::kpi::Metric;
use storelens::models::Order;

fn order(id: &str, product: &str, sales: i64) -> Order {
    Order {
        order_id: id.to_string(),
        order_date: NaiveDate::from_ymd_opt(2017, 1, 5).unwrap(),
        ship_date: None,
        sales: Decimal::from(sales),
        profit: Decimal::ZERO,
        quantity: 1,
        product_name: product.to_string(),
        category: "Office Supplies".into(),
        sub_category: "Fasteners".into(),
        segment: "Consumer".into(),
        region: "East".into(),
        state: "New York".into(),
        returned: false,
    }
}

#[test]
fn ranking_is_descending_and_bounded() {
    let orders = vec![
        order("A", "Stapler", 100),
        order("B", "Stapler", 50),
        order("C", "Desk", 400),
        order("D", "Chair", 200),
    ];
    let rows: Vec<&Order> = orders.iter().collect();
    let ranking = products::top_products(&rows, Metric::Sales, 2);

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].product, "Desk");
    assert_eq!(ranking[0].value, Decimal::from(400));
    assert_eq!(ranking[1].product, "Chair");
}

#[test]
fn ties_break_by_product_name() {
    let orders = vec![
        order("A", "Stapler", 100),
        order("B", "Chair", 100),
        order("C", "Desk", 100),
    ];
    let rows: Vec<&Order> = orders.iter().collect();
    let ranking = products::top_products(&rows, Metric::Sales, 10);

    let names: Vec<&str> = ranking.iter().map(|r| r.product.as_str()).collect();
    assert_eq!(names, vec!["Chair", "Desk", "Stapler"]);
}

#[test]
fn empty_rows_rank_nothing() {
    let ranking = products::top_products(&[], Metric::Sales, 10);
    assert!(ranking.is_empty());
}
