//! Row types for the four raw datasets, their enriched counterparts,
//! and the monthly demand rollup.
//!
//! Field order is the CSV column order. Each type's `COLUMNS` list in
//! its `Table` impl must match it exactly; the table tests enforce this.

use crate::{
    table::Table,
    types::{ProductId, ShipmentId, SupplierId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supplier risk cut points. Buckets are half-open: [0, LOW) is Low,
/// [LOW, HIGH) is Medium, [HIGH, 1.0] is High.
pub const RISK_LOW_UPPER: f64 = 0.3;
pub const RISK_MEDIUM_UPPER: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Bucket a risk score. Returns None for scores outside [0, 1] or NaN.
    pub fn from_score(score: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&score) {
            return None;
        }
        Some(if score < RISK_LOW_UPPER {
            Self::Low
        } else if score < RISK_MEDIUM_UPPER {
            Self::Medium
        } else {
            Self::High
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// ── Raw rows ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub country: String,
    pub category: String,
    pub performance_score: f64,
    pub risk_score: f64,
    pub lead_time_days: u32,
    pub cost_per_unit: f64,
    pub capacity_utilization: f64,
    pub quality_rating: f64,
    pub financial_stability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub product_category: String,
    pub stock_level: u32,
    pub safety_stock: u32,
    pub reorder_point: u32,
    pub max_stock: u32,
    pub unit_cost: f64,
    pub carrying_cost_percent: f64,
    pub demand_variance: f64,
    pub supplier_id: SupplierId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub product_category: String,
    pub demand_quantity: u32,
    pub unit_price: f64,
    pub customer_segment: String,
    pub sales_channel: String,
    #[serde(with = "flag")]
    pub promotion_flag: bool,
    pub market_condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsRecord {
    pub shipment_id: ShipmentId,
    pub supplier_id: SupplierId,
    pub product_id: ProductId,
    pub transportation_mode: String,
    pub quantity: u32,
    pub distance_miles: u32,
    pub shipping_cost: f64,
    pub fuel_surcharge: f64,
    pub delivery_time_days: u32,
    pub planned_delivery_time: u32,
    pub actual_delivery_time: u32,
    #[serde(with = "flag")]
    pub on_time_delivery: bool,
    pub damage_incidents: u32,
    pub carbon_footprint_kg: f64,
}

// ── Enriched rows ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierAnalysis {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub country: String,
    pub category: String,
    pub performance_score: f64,
    pub risk_score: f64,
    pub lead_time_days: u32,
    pub cost_per_unit: f64,
    pub capacity_utilization: f64,
    pub quality_rating: f64,
    pub financial_stability: f64,
    pub overall_score: f64,
    pub risk_category: RiskCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAnalysis {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub product_category: String,
    pub stock_level: u32,
    pub safety_stock: u32,
    pub reorder_point: u32,
    pub max_stock: u32,
    pub unit_cost: f64,
    pub carrying_cost_percent: f64,
    pub demand_variance: f64,
    pub supplier_id: SupplierId,
    pub inventory_value: f64,
    pub carrying_cost: f64,
    #[serde(with = "flag")]
    pub stockout_risk: bool,
    #[serde(with = "flag")]
    pub overstock_risk: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandAnalysis {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub product_category: String,
    pub demand_quantity: u32,
    pub unit_price: f64,
    pub customer_segment: String,
    pub sales_channel: String,
    #[serde(with = "flag")]
    pub promotion_flag: bool,
    pub market_condition: String,
    pub revenue: f64,
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
    /// 0 = Monday … 6 = Sunday.
    pub day_of_week: u32,
}

/// One (product, year, month) group of the demand rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDemand {
    pub product_id: ProductId,
    pub year: i32,
    pub month: u32,
    pub demand_quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsAnalysis {
    pub shipment_id: ShipmentId,
    pub supplier_id: SupplierId,
    pub product_id: ProductId,
    pub transportation_mode: String,
    pub quantity: u32,
    pub distance_miles: u32,
    pub shipping_cost: f64,
    pub fuel_surcharge: f64,
    pub delivery_time_days: u32,
    pub planned_delivery_time: u32,
    pub actual_delivery_time: u32,
    #[serde(with = "flag")]
    pub on_time_delivery: bool,
    pub damage_incidents: u32,
    pub carbon_footprint_kg: f64,
    pub cost_per_unit: f64,
    pub cost_per_mile: f64,
    #[serde(with = "flag")]
    pub delivery_performance: bool,
    pub efficiency_score: f64,
}

// ── Table bundles ────────────────────────────────────────────────────────────

/// The four raw datasets as read by the extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTables {
    pub suppliers: Vec<Supplier>,
    pub inventory: Vec<InventoryRecord>,
    pub demand: Vec<DemandRecord>,
    pub logistics: Vec<LogisticsRecord>,
}

/// The five tables produced by the transformer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformedTables {
    pub suppliers: Vec<SupplierAnalysis>,
    pub inventory: Vec<InventoryAnalysis>,
    pub demand: Vec<DemandAnalysis>,
    pub logistics: Vec<LogisticsAnalysis>,
    pub demand_monthly: Vec<MonthlyDemand>,
}

// ── Table schemas ────────────────────────────────────────────────────────────

const SUPPLIER_COLUMNS: &[&str] = &[
    "supplier_id",
    "supplier_name",
    "country",
    "category",
    "performance_score",
    "risk_score",
    "lead_time_days",
    "cost_per_unit",
    "capacity_utilization",
    "quality_rating",
    "financial_stability",
];

const INVENTORY_COLUMNS: &[&str] = &[
    "date",
    "product_id",
    "product_category",
    "stock_level",
    "safety_stock",
    "reorder_point",
    "max_stock",
    "unit_cost",
    "carrying_cost_percent",
    "demand_variance",
    "supplier_id",
];

const DEMAND_COLUMNS: &[&str] = &[
    "date",
    "product_id",
    "product_category",
    "demand_quantity",
    "unit_price",
    "customer_segment",
    "sales_channel",
    "promotion_flag",
    "market_condition",
];

const LOGISTICS_COLUMNS: &[&str] = &[
    "shipment_id",
    "supplier_id",
    "product_id",
    "transportation_mode",
    "quantity",
    "distance_miles",
    "shipping_cost",
    "fuel_surcharge",
    "delivery_time_days",
    "planned_delivery_time",
    "actual_delivery_time",
    "on_time_delivery",
    "damage_incidents",
    "carbon_footprint_kg",
];

impl Table for Supplier {
    const NAME: &'static str = "suppliers";
    const COLUMNS: &'static [&'static str] = SUPPLIER_COLUMNS;
}

impl Table for InventoryRecord {
    const NAME: &'static str = "inventory";
    const COLUMNS: &'static [&'static str] = INVENTORY_COLUMNS;
}

impl Table for DemandRecord {
    const NAME: &'static str = "demand";
    const COLUMNS: &'static [&'static str] = DEMAND_COLUMNS;
}

impl Table for LogisticsRecord {
    const NAME: &'static str = "logistics";
    const COLUMNS: &'static [&'static str] = LOGISTICS_COLUMNS;
}

impl Table for SupplierAnalysis {
    const NAME: &'static str = "suppliers";
    const COLUMNS: &'static [&'static str] = &[
        "supplier_id",
        "supplier_name",
        "country",
        "category",
        "performance_score",
        "risk_score",
        "lead_time_days",
        "cost_per_unit",
        "capacity_utilization",
        "quality_rating",
        "financial_stability",
        "overall_score",
        "risk_category",
    ];
}

impl Table for InventoryAnalysis {
    const NAME: &'static str = "inventory";
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "product_id",
        "product_category",
        "stock_level",
        "safety_stock",
        "reorder_point",
        "max_stock",
        "unit_cost",
        "carrying_cost_percent",
        "demand_variance",
        "supplier_id",
        "inventory_value",
        "carrying_cost",
        "stockout_risk",
        "overstock_risk",
    ];
}

impl Table for DemandAnalysis {
    const NAME: &'static str = "demand";
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "product_id",
        "product_category",
        "demand_quantity",
        "unit_price",
        "customer_segment",
        "sales_channel",
        "promotion_flag",
        "market_condition",
        "revenue",
        "year",
        "month",
        "quarter",
        "day_of_week",
    ];
}

impl Table for MonthlyDemand {
    const NAME: &'static str = "demand_monthly";
    const COLUMNS: &'static [&'static str] =
        &["product_id", "year", "month", "demand_quantity", "revenue"];
}

impl Table for LogisticsAnalysis {
    const NAME: &'static str = "logistics";
    const COLUMNS: &'static [&'static str] = &[
        "shipment_id",
        "supplier_id",
        "product_id",
        "transportation_mode",
        "quantity",
        "distance_miles",
        "shipping_cost",
        "fuel_surcharge",
        "delivery_time_days",
        "planned_delivery_time",
        "actual_delivery_time",
        "on_time_delivery",
        "damage_incidents",
        "carbon_footprint_kg",
        "cost_per_unit",
        "cost_per_mile",
        "delivery_performance",
        "efficiency_score",
    ];
}

/// Boolean columns are written as 0/1. Readers also accept true/false.
mod flag {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim() {
            "1" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "false" | "False" | "FALSE" => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag value '{other}'"))),
        }
    }
}
