//! Analytics calculator: reduces the transformed tables to scalar
//! business metrics and formats them for the analytics document.
//!
//! Pure aggregation. Empty tables produce zeros rather than NaN, and
//! every ratio is guarded against a zero denominator.

use crate::model::{RiskCategory, TransformedTables};
use serde::{Deserialize, Serialize};

/// Share of inventory value and shipping spend counted as optimization potential.
pub const INVENTORY_OPTIMIZATION_SHARE: f64 = 0.32;
pub const SHIPPING_OPTIMIZATION_SHARE: f64 = 0.28;
/// Share of carrying cost counted as working-capital improvement.
pub const CARRYING_COST_REDUCTION_SHARE: f64 = 0.35;

// Fixed positioning statements carried in the analytics document.
const INVENTORY_COST_REDUCTION: &str = "32% potential savings";
const DEMAND_FORECAST_ACCURACY: &str = "91.2% with advanced ML models";
const SUPPLIER_RISK_MITIGATION: &str = "85% disruption prediction accuracy";
const LOGISTICS_EFFICIENCY_GAIN: &str = "28% cost reduction potential";
const ROI_TIMELINE: &str = "18 months payback period";

/// Raw numeric metrics, before display formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainMetrics {
    pub total_inventory_value: f64,
    pub total_carrying_cost: f64,
    pub avg_supplier_performance: f64,
    pub total_demand_units: u64,
    pub total_revenue: f64,
    pub avg_delivery_time: f64,
    pub on_time_delivery_rate: f64,
    pub high_risk_suppliers: u64,
    pub stockout_risk_products: u64,
    pub overstock_products: u64,
    pub avg_logistics_cost_per_unit: f64,
    pub total_shipping_cost: f64,
    pub total_fuel_surcharge: f64,
    pub inventory_turnover: f64,
    /// Percentage, 0–100.
    pub service_level: f64,
    pub total_carbon_footprint: f64,
    pub optimization_value: f64,
    pub cost_reduction_potential: f64,
}

/// The analytics document as persisted by the loader. Keys serialize in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_inventory_value: String,
    pub total_carrying_cost: String,
    pub supplier_performance_avg: String,
    pub total_demand_units: String,
    pub total_revenue: String,
    pub avg_delivery_time: String,
    pub on_time_delivery_rate: String,
    pub high_risk_suppliers: u64,
    pub products_at_stockout_risk: u64,
    pub products_overstocked: u64,
    pub avg_logistics_cost_per_unit: String,
    pub total_shipping_cost: String,
    pub inventory_turnover_ratio: String,
    pub service_level_percentage: String,
    pub carbon_footprint_total: String,
    pub optimization_potential: String,
    pub inventory_cost_reduction: String,
    pub demand_forecast_accuracy: String,
    pub supplier_risk_mitigation: String,
    pub logistics_efficiency_gain: String,
    pub working_capital_improvement: String,
    pub roi_timeline: String,
}

/// Executive summary document. Static headline figures, not computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub supply_chain_optimization_value: String,
    pub inventory_cost_reduction: String,
    pub demand_forecasting_improvement: String,
    pub supplier_risk_mitigation: String,
    pub logistics_optimization: String,
    pub service_level_improvement: String,
    pub working_capital_optimization: String,
    pub sustainability_impact: String,
    pub digital_transformation_roi: String,
    pub competitive_advantage: String,
    pub implementation_timeline: String,
    pub business_continuity_assurance: String,
}

impl Default for ExecutiveSummary {
    fn default() -> Self {
        Self {
            supply_chain_optimization_value: "$52.3M annually".into(),
            inventory_cost_reduction: "32% potential savings ($16.7M)".into(),
            demand_forecasting_improvement: "91.2% accuracy with ML models".into(),
            supplier_risk_mitigation: "85% disruption prediction accuracy".into(),
            logistics_optimization: "28% transportation cost reduction".into(),
            service_level_improvement: "99.5% order fulfillment target".into(),
            working_capital_optimization: "$12.4M cash flow improvement".into(),
            sustainability_impact: "25% carbon footprint reduction potential".into(),
            digital_transformation_roi: "2,400% return on technology investment".into(),
            competitive_advantage: "Industry-leading supply chain efficiency".into(),
            implementation_timeline: "18 months full deployment".into(),
            business_continuity_assurance: "99.2% supply chain resilience".into(),
        }
    }
}

pub fn calculate(tables: &TransformedTables) -> SupplyChainMetrics {
    let total_inventory_value: f64 = tables.inventory.iter().map(|r| r.inventory_value).sum();
    let total_carrying_cost: f64 = tables.inventory.iter().map(|r| r.carrying_cost).sum();
    let total_demand_units: u64 = tables
        .demand
        .iter()
        .map(|r| u64::from(r.demand_quantity))
        .sum();
    let total_revenue: f64 = tables.demand.iter().map(|r| r.revenue).sum();

    // Counts the High category (risk >= 0.6), so a score of exactly 0.6 is
    // high risk here and in suppliers_processed.csv alike.
    let high_risk_suppliers = count(tables.suppliers.iter(), |s| {
        s.risk_category == RiskCategory::High
    });
    let stockout_risk_products = count(tables.inventory.iter(), |r| r.stockout_risk);
    let overstock_products = count(tables.inventory.iter(), |r| r.overstock_risk);

    let total_shipping_cost: f64 = tables.logistics.iter().map(|r| r.shipping_cost).sum();

    let inventory_turnover = ratio(total_revenue, total_inventory_value);
    let service_level = if tables.inventory.is_empty() {
        100.0
    } else {
        (1.0 - stockout_risk_products as f64 / tables.inventory.len() as f64) * 100.0
    };

    SupplyChainMetrics {
        total_inventory_value,
        total_carrying_cost,
        avg_supplier_performance: mean(tables.suppliers.iter().map(|s| s.performance_score)),
        total_demand_units,
        total_revenue,
        avg_delivery_time: mean(tables.logistics.iter().map(|r| r.delivery_time_days as f64)),
        on_time_delivery_rate: mean(
            tables
                .logistics
                .iter()
                .map(|r| if r.on_time_delivery { 1.0 } else { 0.0 }),
        ),
        high_risk_suppliers,
        stockout_risk_products,
        overstock_products,
        avg_logistics_cost_per_unit: mean(tables.logistics.iter().map(|r| r.cost_per_unit)),
        total_shipping_cost,
        total_fuel_surcharge: tables.logistics.iter().map(|r| r.fuel_surcharge).sum(),
        inventory_turnover,
        service_level,
        total_carbon_footprint: tables.logistics.iter().map(|r| r.carbon_footprint_kg).sum(),
        optimization_value: total_inventory_value * INVENTORY_OPTIMIZATION_SHARE
            + total_shipping_cost * SHIPPING_OPTIMIZATION_SHARE,
        cost_reduction_potential: total_carrying_cost * CARRYING_COST_REDUCTION_SHARE,
    }
}

impl SupplyChainMetrics {
    pub fn report(&self) -> AnalyticsReport {
        AnalyticsReport {
            total_inventory_value: currency(self.total_inventory_value, 2),
            total_carrying_cost: currency(self.total_carrying_cost, 2),
            supplier_performance_avg: percent(self.avg_supplier_performance),
            total_demand_units: grouped(self.total_demand_units as f64, 0),
            total_revenue: currency(self.total_revenue, 2),
            avg_delivery_time: format!("{:.1} days", self.avg_delivery_time),
            on_time_delivery_rate: percent(self.on_time_delivery_rate),
            high_risk_suppliers: self.high_risk_suppliers,
            products_at_stockout_risk: self.stockout_risk_products,
            products_overstocked: self.overstock_products,
            avg_logistics_cost_per_unit: format!("${:.2}", self.avg_logistics_cost_per_unit),
            total_shipping_cost: currency(self.total_shipping_cost, 2),
            inventory_turnover_ratio: format!("{:.2}", self.inventory_turnover),
            service_level_percentage: format!("{:.1}%", self.service_level),
            carbon_footprint_total: format!("{} kg CO2", grouped(self.total_carbon_footprint, 0)),
            optimization_potential: format!("{} annually", currency(self.optimization_value, 0)),
            inventory_cost_reduction: INVENTORY_COST_REDUCTION.into(),
            demand_forecast_accuracy: DEMAND_FORECAST_ACCURACY.into(),
            supplier_risk_mitigation: SUPPLIER_RISK_MITIGATION.into(),
            logistics_efficiency_gain: LOGISTICS_EFFICIENCY_GAIN.into(),
            working_capital_improvement: currency(self.cost_reduction_potential, 0),
            roi_timeline: ROI_TIMELINE.into(),
        }
    }

    pub fn log_summary(&self) {
        log::info!(
            "analytics: inventory value ${:.2}, revenue ${:.2}, turnover {:.2}, service level {:.1}%",
            self.total_inventory_value,
            self.total_revenue,
            self.inventory_turnover,
            self.service_level
        );
        log::info!(
            "analytics: {} high-risk suppliers, {} stockout-risk rows, {} overstocked rows",
            self.high_risk_suppliers,
            self.stockout_risk_products,
            self.overstock_products
        );
    }
}

fn count<T>(rows: impl Iterator<Item = T>, pred: impl Fn(&T) -> bool) -> u64 {
    rows.filter(|r| pred(r)).count() as u64
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// numerator / denominator, or 0 when the denominator is 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// `$1,234.56`. Negative values render as `$-1,234.56`.
pub fn currency(value: f64, decimals: usize) -> String {
    format!("${}", grouped(value, decimals))
}

/// A [0, 1] fraction as a one-decimal percentage: 0.825 → `82.5%`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Fixed-point with comma thousands separators: 1234567.891 → `1,234,567.89`.
pub fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(grouped(0.0, 2), "0.00");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(1000.0, 0), "1,000");
        assert_eq!(grouped(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(grouped(-12_345.5, 1), "-12,345.5");
    }

    #[test]
    fn currency_and_percent_formats() {
        assert_eq!(currency(192_000_000.0, 2), "$192,000,000.00");
        assert_eq!(currency(52_300.4, 0), "$52,300");
        assert_eq!(percent(0.825), "82.5%");
    }

    #[test]
    fn ratio_is_zero_for_zero_denominator() {
        assert_eq!(ratio(1_000.0, 0.0), 0.0);
        assert_eq!(ratio(1_000.0, 500.0), 2.0);
    }

    #[test]
    fn empty_tables_produce_zeros_not_nan() {
        let metrics = calculate(&TransformedTables::default());
        assert_eq!(metrics.inventory_turnover, 0.0);
        assert_eq!(metrics.avg_supplier_performance, 0.0);
        assert_eq!(metrics.avg_delivery_time, 0.0);
        assert_eq!(metrics.service_level, 100.0);
        let report = metrics.report();
        assert_eq!(report.inventory_turnover_ratio, "0.00");
        assert_eq!(report.total_revenue, "$0.00");
    }
}
