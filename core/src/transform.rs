//! Transformer: raw tables in, enriched tables plus the monthly demand
//! rollup out.
//!
//! Pure function of its input. Every stage builds new rows; the raw
//! tables are only borrowed.

use crate::{
    error::{PipelineError, PipelineResult},
    model::{
        DemandAnalysis, DemandRecord, InventoryAnalysis, InventoryRecord, LogisticsAnalysis,
        LogisticsRecord, MonthlyDemand, RawTables, RiskCategory, Supplier, SupplierAnalysis,
        TransformedTables,
    },
    types::ProductId,
};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Weights of the supplier overall score. They sum to 1.0, so the score
/// stays in [0, 1] when every input does.
pub const PERFORMANCE_WEIGHT: f64 = 0.35;
pub const RISK_WEIGHT: f64 = 0.25;
pub const QUALITY_WEIGHT: f64 = 0.25;
pub const FINANCIAL_WEIGHT: f64 = 0.15;

/// Stock at or above this fraction of max_stock counts as overstocked.
pub const OVERSTOCK_FRACTION: f64 = 0.9;

pub fn transform(raw: &RawTables) -> PipelineResult<TransformedTables> {
    let suppliers = raw
        .suppliers
        .iter()
        .map(enrich_supplier)
        .collect::<PipelineResult<Vec<_>>>()?;
    let inventory: Vec<_> = raw.inventory.iter().map(enrich_inventory).collect();
    let demand: Vec<_> = raw.demand.iter().map(enrich_demand).collect();
    let demand_monthly = monthly_rollup(&demand);
    let logistics = raw
        .logistics
        .iter()
        .map(enrich_logistics)
        .collect::<PipelineResult<Vec<_>>>()?;

    log::info!(
        "transform: {} suppliers, {} inventory, {} demand ({} monthly groups), {} logistics",
        suppliers.len(),
        inventory.len(),
        demand.len(),
        demand_monthly.len(),
        logistics.len()
    );

    Ok(TransformedTables {
        suppliers,
        inventory,
        demand,
        logistics,
        demand_monthly,
    })
}

pub fn overall_score(s: &Supplier) -> f64 {
    s.performance_score * PERFORMANCE_WEIGHT
        + (1.0 - s.risk_score) * RISK_WEIGHT
        + s.quality_rating * QUALITY_WEIGHT
        + s.financial_stability * FINANCIAL_WEIGHT
}

pub fn enrich_supplier(s: &Supplier) -> PipelineResult<SupplierAnalysis> {
    let risk_category = RiskCategory::from_score(s.risk_score).ok_or_else(|| {
        PipelineError::invalid(
            "suppliers",
            "risk_score",
            format!("{} has risk_score {} outside [0, 1]", s.supplier_id, s.risk_score),
        )
    })?;

    Ok(SupplierAnalysis {
        supplier_id: s.supplier_id.clone(),
        supplier_name: s.supplier_name.clone(),
        country: s.country.clone(),
        category: s.category.clone(),
        performance_score: s.performance_score,
        risk_score: s.risk_score,
        lead_time_days: s.lead_time_days,
        cost_per_unit: s.cost_per_unit,
        capacity_utilization: s.capacity_utilization,
        quality_rating: s.quality_rating,
        financial_stability: s.financial_stability,
        overall_score: overall_score(s),
        risk_category,
    })
}

pub fn enrich_inventory(r: &InventoryRecord) -> InventoryAnalysis {
    let inventory_value = r.stock_level as f64 * r.unit_cost;
    InventoryAnalysis {
        date: r.date,
        product_id: r.product_id.clone(),
        product_category: r.product_category.clone(),
        stock_level: r.stock_level,
        safety_stock: r.safety_stock,
        reorder_point: r.reorder_point,
        max_stock: r.max_stock,
        unit_cost: r.unit_cost,
        carrying_cost_percent: r.carrying_cost_percent,
        demand_variance: r.demand_variance,
        supplier_id: r.supplier_id.clone(),
        inventory_value,
        carrying_cost: inventory_value * r.carrying_cost_percent,
        stockout_risk: r.stock_level <= r.reorder_point,
        overstock_risk: r.stock_level as f64 >= r.max_stock as f64 * OVERSTOCK_FRACTION,
    }
}

pub fn enrich_demand(r: &DemandRecord) -> DemandAnalysis {
    DemandAnalysis {
        date: r.date,
        product_id: r.product_id.clone(),
        product_category: r.product_category.clone(),
        demand_quantity: r.demand_quantity,
        unit_price: r.unit_price,
        customer_segment: r.customer_segment.clone(),
        sales_channel: r.sales_channel.clone(),
        promotion_flag: r.promotion_flag,
        market_condition: r.market_condition.clone(),
        revenue: r.demand_quantity as f64 * r.unit_price,
        year: r.date.year(),
        month: r.date.month(),
        quarter: (r.date.month() - 1) / 3 + 1,
        day_of_week: r.date.weekday().num_days_from_monday(),
    }
}

/// Sum quantity and revenue per (product, year, month). Groups come out
/// in ascending key order; products with no rows in a month are absent.
pub fn monthly_rollup(demand: &[DemandAnalysis]) -> Vec<MonthlyDemand> {
    let mut groups: BTreeMap<(ProductId, i32, u32), (u64, f64)> = BTreeMap::new();
    for row in demand {
        let entry = groups
            .entry((row.product_id.clone(), row.year, row.month))
            .or_insert((0, 0.0));
        entry.0 += u64::from(row.demand_quantity);
        entry.1 += row.revenue;
    }

    groups
        .into_iter()
        .map(|((product_id, year, month), (demand_quantity, revenue))| MonthlyDemand {
            product_id,
            year,
            month,
            demand_quantity,
            revenue,
        })
        .collect()
}

pub fn enrich_logistics(r: &LogisticsRecord) -> PipelineResult<LogisticsAnalysis> {
    if r.quantity == 0 {
        return Err(PipelineError::invalid(
            "logistics",
            "quantity",
            format!("{} has zero quantity", r.shipment_id),
        ));
    }
    if r.distance_miles == 0 {
        return Err(PipelineError::invalid(
            "logistics",
            "distance_miles",
            format!("{} has zero distance", r.shipment_id),
        ));
    }
    if !r.shipping_cost.is_finite() || r.shipping_cost < 0.0 {
        return Err(PipelineError::invalid(
            "logistics",
            "shipping_cost",
            format!("{} has shipping cost {}", r.shipment_id, r.shipping_cost),
        ));
    }

    let cost_per_unit = r.shipping_cost / r.quantity as f64;
    let delivery_performance = r.actual_delivery_time <= r.planned_delivery_time;
    let on_time_factor = if delivery_performance { 1.0 } else { 0.0 };
    // cost_per_unit >= 0 and damage_incidents is unsigned: both denominators are >= 1.
    let efficiency_score = 1.0 / (1.0 + cost_per_unit)
        * on_time_factor
        * (1.0 / (1.0 + r.damage_incidents as f64));

    Ok(LogisticsAnalysis {
        shipment_id: r.shipment_id.clone(),
        supplier_id: r.supplier_id.clone(),
        product_id: r.product_id.clone(),
        transportation_mode: r.transportation_mode.clone(),
        quantity: r.quantity,
        distance_miles: r.distance_miles,
        shipping_cost: r.shipping_cost,
        fuel_surcharge: r.fuel_surcharge,
        delivery_time_days: r.delivery_time_days,
        planned_delivery_time: r.planned_delivery_time,
        actual_delivery_time: r.actual_delivery_time,
        on_time_delivery: r.on_time_delivery,
        damage_incidents: r.damage_incidents,
        carbon_footprint_kg: r.carbon_footprint_kg,
        cost_per_unit,
        cost_per_mile: r.shipping_cost / r.distance_miles as f64,
        delivery_performance,
        efficiency_score,
    })
}
