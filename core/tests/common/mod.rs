//! Row builders shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use supplychain_core::model::{
    DemandRecord, InventoryRecord, LogisticsRecord, RawTables, Supplier,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn supplier(id: &str, performance: f64, risk: f64, quality: f64, financial: f64) -> Supplier {
    Supplier {
        supplier_id: id.into(),
        supplier_name: format!("Test_{id}"),
        country: "Germany".into(),
        category: "Components".into(),
        performance_score: performance,
        risk_score: risk,
        lead_time_days: 14,
        cost_per_unit: 25.0,
        capacity_utilization: 0.8,
        quality_rating: quality,
        financial_stability: financial,
    }
}

pub fn inventory(stock: u32, reorder_point: u32, max_stock: u32, unit_cost: f64) -> InventoryRecord {
    InventoryRecord {
        date: date(2024, 6, 1),
        product_id: "PROD_0001".into(),
        product_category: "Industrial".into(),
        stock_level: stock,
        safety_stock: reorder_point / 2,
        reorder_point,
        max_stock,
        unit_cost,
        carrying_cost_percent: 0.25,
        demand_variance: 0.2,
        supplier_id: "SUP_0001".into(),
    }
}

pub fn demand(product: &str, on: NaiveDate, quantity: u32, price: f64) -> DemandRecord {
    DemandRecord {
        date: on,
        product_id: product.into(),
        product_category: "Electronics".into(),
        demand_quantity: quantity,
        unit_price: price,
        customer_segment: "SMB".into(),
        sales_channel: "Online".into(),
        promotion_flag: false,
        market_condition: "Normal".into(),
    }
}

pub fn shipment(
    id: &str,
    quantity: u32,
    distance: u32,
    cost: f64,
    planned: u32,
    actual: u32,
    damage: u32,
) -> LogisticsRecord {
    LogisticsRecord {
        shipment_id: id.into(),
        supplier_id: "SUP_0001".into(),
        product_id: "PROD_0001".into(),
        transportation_mode: "Truck".into(),
        quantity,
        distance_miles: distance,
        shipping_cost: cost,
        fuel_surcharge: cost * 0.1,
        delivery_time_days: planned,
        planned_delivery_time: planned,
        actual_delivery_time: actual,
        on_time_delivery: actual <= planned,
        damage_incidents: damage,
        carbon_footprint_kg: quantity as f64 * distance as f64,
    }
}

/// A tiny but complete set of raw tables.
pub fn small_raw_tables() -> RawTables {
    RawTables {
        suppliers: vec![
            supplier("SUP_0001", 0.9, 0.1, 0.95, 0.8),
            supplier("SUP_0002", 0.7, 0.45, 0.8, 0.6),
            supplier("SUP_0003", 0.66, 0.7, 0.75, 0.55),
        ],
        inventory: vec![
            inventory(50, 60, 200, 10.0),
            inventory(190, 60, 200, 5.0),
            inventory(100, 30, 180, 2.0),
        ],
        demand: vec![
            demand("PROD_0001", date(2024, 1, 15), 100, 10.0),
            demand("PROD_0001", date(2024, 1, 16), 50, 12.0),
            demand("PROD_0001", date(2024, 2, 1), 10, 10.0),
            demand("PROD_0002", date(2024, 1, 20), 7, 3.0),
        ],
        logistics: vec![
            shipment("SHIP_000001", 100, 500, 300.0, 5, 5, 0),
            shipment("SHIP_000002", 10, 100, 90.0, 3, 6, 1),
        ],
    }
}
