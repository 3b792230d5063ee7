//! Shared primitive types used across the pipeline.

/// Stable supplier identifier, e.g. `SUP_0042`.
pub type SupplierId = String;

/// Stable product identifier, e.g. `PROD_0007`.
pub type ProductId = String;

/// Shipment identifier, e.g. `SHIP_000123`.
pub type ShipmentId = String;

/// Identifier stamped on each pipeline run for log correlation.
pub type RunId = String;
