//! Synthetic supply-chain data generator.
//!
//! Produces the four raw datasets from parameterized distributions.
//! Every dataset draws from its own DatasetRng slot, so the same seed
//! always yields byte-identical files.
//!
//! Contract relied on by the transformer: every logistics row has a
//! non-zero quantity and distance.

use crate::{
    config::{DatasetPaths, GeneratorConfig, PipelineConfig},
    error::PipelineResult,
    model::{DemandRecord, InventoryRecord, LogisticsRecord, RawTables, Supplier},
    rng::{DatasetRng, DatasetSlot, RngBank},
    table::write_table,
};
use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

const SUPPLIER_COUNTRIES: &[&str] = &[
    "USA",
    "China",
    "Germany",
    "Japan",
    "Mexico",
    "India",
    "South Korea",
    "Brazil",
];

const SUPPLIER_CATEGORIES: &[&str] = &[
    "Raw Materials",
    "Components",
    "Packaging",
    "Manufacturing",
    "Logistics",
];

const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Automotive",
    "Consumer_Goods",
    "Industrial",
    "Healthcare",
];

const CUSTOMER_SEGMENTS: &[(&str, f64)] = &[
    ("Enterprise", 0.30),
    ("SMB", 0.25),
    ("Consumer", 0.35),
    ("Government", 0.10),
];

const SALES_CHANNELS: &[(&str, f64)] = &[
    ("Direct", 0.40),
    ("Retail", 0.30),
    ("Online", 0.20),
    ("Partner", 0.10),
];

const MARKET_CONDITIONS: &[(&str, f64)] = &[
    ("Normal", 0.70),
    ("High_Demand", 0.15),
    ("Low_Demand", 0.15),
];

const PROMOTION_PROBABILITY: f64 = 0.15;
const ON_TIME_PROBABILITY: f64 = 0.88;

const DAMAGE_INCIDENTS: &[(u32, f64)] = &[(0, 0.92), (1, 0.07), (2, 0.01)];

/// Cost and transit-time ranges for one transportation mode.
struct ModeProfile {
    name: &'static str,
    base_cost: (f64, f64),
    /// Half-open day range.
    delivery_days: (i64, i64),
}

const TRANSPORT_MODES: &[(ModeProfile, f64)] = &[
    (ModeProfile { name: "Truck", base_cost: (100.0, 500.0), delivery_days: (1, 7) }, 0.45),
    (ModeProfile { name: "Rail", base_cost: (80.0, 300.0), delivery_days: (5, 14) }, 0.20),
    (ModeProfile { name: "Air", base_cost: (200.0, 800.0), delivery_days: (1, 3) }, 0.15),
    (ModeProfile { name: "Ship", base_cost: (50.0, 200.0), delivery_days: (14, 45) }, 0.10),
    (ModeProfile { name: "Intermodal", base_cost: (120.0, 400.0), delivery_days: (7, 21) }, 0.10),
];

/// Something that can (re)create the raw datasets on disk.
/// The extractor calls this once when a source file is missing.
pub trait DatasetGenerator {
    fn generate(&mut self, paths: &DatasetPaths) -> PipelineResult<()>;
}

pub struct SyntheticGenerator {
    config: GeneratorConfig,
    rng_bank: RngBank,
}

impl SyntheticGenerator {
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng_bank: RngBank::new(seed),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.generator.clone(), config.seed)
    }

    /// Build all four datasets in memory without touching disk.
    pub fn generate_tables(&self) -> PipelineResult<RawTables> {
        self.config.validate()?;
        let dates = self.config.demand_dates();

        Ok(RawTables {
            suppliers: self.suppliers(&mut self.rng_bank.for_dataset(DatasetSlot::Suppliers)),
            inventory: self.inventory(&dates, &mut self.rng_bank.for_dataset(DatasetSlot::Inventory)),
            demand: self.demand(&dates, &mut self.rng_bank.for_dataset(DatasetSlot::Demand)),
            logistics: self.logistics(&mut self.rng_bank.for_dataset(DatasetSlot::Logistics)),
        })
    }

    fn suppliers(&self, rng: &mut DatasetRng) -> Vec<Supplier> {
        (1..=self.config.supplier_count)
            .map(|i| Supplier {
                supplier_id: format!("SUP_{i:04}"),
                supplier_name: format!("Global_Supplier_{i}"),
                country: rng.pick(SUPPLIER_COUNTRIES).to_string(),
                category: rng.pick(SUPPLIER_CATEGORIES).to_string(),
                performance_score: rng.uniform(0.65, 0.98),
                risk_score: rng.uniform(0.05, 0.75),
                lead_time_days: rng.int_range(3, 60) as u32,
                cost_per_unit: rng.uniform(8.50, 150.75),
                capacity_utilization: rng.uniform(0.60, 0.95),
                quality_rating: rng.uniform(0.70, 0.99),
                financial_stability: rng.uniform(0.50, 0.95),
            })
            .collect()
    }

    fn inventory(&self, dates: &[NaiveDate], rng: &mut DatasetRng) -> Vec<InventoryRecord> {
        let window = &dates[dates.len().saturating_sub(self.config.inventory_days)..];
        let mut rows = Vec::with_capacity(window.len() * self.config.product_count);

        for date in window {
            let seasonal = 1.0 + 0.4 * (2.0 * PI * date.ordinal() as f64 / 365.0).sin();
            for product in 1..=self.config.product_count {
                let category = rng.pick(PRODUCT_CATEGORIES);
                let base_stock = rng.int_range(100, 2000) as f64;
                let stock = (base_stock * seasonal * rng.uniform(0.7, 1.3)) as u32;

                rows.push(InventoryRecord {
                    date: *date,
                    product_id: product_id(product),
                    product_category: category.to_string(),
                    stock_level: stock,
                    safety_stock: (stock as f64 * 0.15) as u32,
                    reorder_point: (stock as f64 * 0.30) as u32,
                    max_stock: (stock as f64 * 1.8) as u32,
                    unit_cost: round_to(rng.uniform(12.99, 199.99), 2),
                    carrying_cost_percent: round_to(rng.uniform(0.15, 0.35), 3),
                    demand_variance: round_to(rng.uniform(0.10, 0.45), 3),
                    supplier_id: self.random_supplier(rng),
                });
            }
        }
        rows
    }

    fn demand(&self, dates: &[NaiveDate], rng: &mut DatasetRng) -> Vec<DemandRecord> {
        let mut rows = Vec::with_capacity(dates.len() * self.config.product_count);

        for date in dates {
            let yearly = 1.0 + 0.25 * (2.0 * PI * date.ordinal() as f64 / 365.0).sin();
            let weekday = date.weekday().num_days_from_monday() as f64;
            let weekly = 1.0 + 0.15 * (2.0 * PI * weekday / 7.0).sin();

            for product in 1..=self.config.product_count {
                let category = *rng.pick(PRODUCT_CATEGORIES);
                let base_demand = match category {
                    "Electronics" => rng.uniform(50.0, 200.0),
                    "Automotive" => rng.uniform(30.0, 150.0),
                    "Healthcare" => rng.uniform(40.0, 180.0),
                    _ => rng.uniform(25.0, 120.0),
                };

                let quantity =
                    ((base_demand * yearly * weekly * rng.uniform(0.6, 1.4)) as u32).max(1);

                // Price drifts against demand: busier days sell slightly cheaper.
                let base_price = rng.uniform(25.99, 299.99);
                let elasticity = rng.uniform(-0.8, -0.2);
                let price_factor = 1.0 + (quantity as f64 / base_demand - 1.0) * elasticity * 0.1;

                rows.push(DemandRecord {
                    date: *date,
                    product_id: product_id(product),
                    product_category: category.to_string(),
                    demand_quantity: quantity,
                    unit_price: round_to(base_price * price_factor, 2),
                    customer_segment: rng.weighted(CUSTOMER_SEGMENTS).to_string(),
                    sales_channel: rng.weighted(SALES_CHANNELS).to_string(),
                    promotion_flag: rng.chance(PROMOTION_PROBABILITY),
                    market_condition: rng.weighted(MARKET_CONDITIONS).to_string(),
                });
            }
        }
        rows
    }

    fn logistics(&self, rng: &mut DatasetRng) -> Vec<LogisticsRecord> {
        (1..=self.config.shipment_count)
            .map(|shipment| {
                let mode = rng.weighted(TRANSPORT_MODES);
                let base_cost = rng.uniform(mode.base_cost.0, mode.base_cost.1);
                let delivery_time = rng.int_range(mode.delivery_days.0, mode.delivery_days.1);

                let quantity = rng.int_range(10, 1000) as u32;
                let distance = rng.int_range(50, 3000) as u32;
                let supplier_id = self.random_supplier(rng);
                let product = rng.int_range(1, self.config.product_count as i64 + 1) as usize;
                let actual = (delivery_time + rng.int_range(-1, 4)).max(0);

                LogisticsRecord {
                    shipment_id: format!("SHIP_{shipment:06}"),
                    supplier_id,
                    product_id: product_id(product),
                    transportation_mode: mode.name.to_string(),
                    quantity,
                    distance_miles: distance,
                    shipping_cost: round_to(base_cost * (1.0 + distance as f64 / 1000.0 * 0.1), 2),
                    fuel_surcharge: round_to(base_cost * rng.uniform(0.05, 0.15), 2),
                    delivery_time_days: delivery_time as u32,
                    planned_delivery_time: delivery_time as u32,
                    actual_delivery_time: actual as u32,
                    on_time_delivery: rng.chance(ON_TIME_PROBABILITY),
                    damage_incidents: *rng.weighted(DAMAGE_INCIDENTS),
                    carbon_footprint_kg: round_to(
                        quantity as f64 * distance as f64 * rng.uniform(0.5, 2.5),
                        2,
                    ),
                }
            })
            .collect()
    }

    fn random_supplier(&self, rng: &mut DatasetRng) -> String {
        let n = rng.int_range(1, self.config.supplier_count as i64 + 1);
        format!("SUP_{n:04}")
    }
}

impl DatasetGenerator for SyntheticGenerator {
    fn generate(&mut self, paths: &DatasetPaths) -> PipelineResult<()> {
        let tables = self.generate_tables()?;

        write_table(&paths.suppliers, &tables.suppliers)?;
        log::info!("generator: {} supplier records", tables.suppliers.len());
        write_table(&paths.inventory, &tables.inventory)?;
        log::info!("generator: {} inventory records", tables.inventory.len());
        write_table(&paths.demand, &tables.demand)?;
        log::info!("generator: {} demand records", tables.demand.len());
        write_table(&paths.logistics, &tables.logistics)?;
        log::info!("generator: {} logistics records", tables.logistics.len());
        Ok(())
    }
}

fn product_id(n: usize) -> String {
    format!("PROD_{n:04}")
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
