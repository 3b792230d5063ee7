//! demand-forecast: fits the baseline forecasters on a synthetic daily
//! demand series and reports the forecasts and an EOQ figure.
//!
//! Usage:
//!   demand-forecast
//!   demand-forecast --seed 7 --days 365 --horizon 30

#[path = "../cli.rs"]
mod cli;

use anyhow::Result;
use chrono::NaiveDate;
use std::env;
use supplychain_core::{
    config::DEFAULT_SEED,
    forecast::{
        economic_order_quantity, forecast, sample_demand_series, Forecaster,
        LinearTrendForecaster, MovingAverageForecaster,
    },
    rng::{DatasetSlot, RngBank},
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = cli::parse_arg(&args, "--seed", DEFAULT_SEED);
    let days = cli::parse_arg(&args, "--days", 365usize);
    let horizon = cli::parse_arg(&args, "--horizon", 30usize);

    let start = NaiveDate::from_ymd_opt(2023, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("invalid start date"))?;
    let mut rng = RngBank::new(seed).for_dataset(DatasetSlot::Forecast);
    let series: Vec<f64> = sample_demand_series(&mut rng, start, days)?
        .iter()
        .map(|o| o.demand as f64)
        .collect();
    log::info!("sampled {} days of demand", series.len());

    let moving_average = MovingAverageForecaster { window: 10 };
    let trend = LinearTrendForecaster;
    let ma_forecast = forecast(&moving_average, &series, horizon)?;
    let trend_forecast = forecast(&trend, &series, horizon)?;
    log::info!(
        "{} and {} fitted on {} points",
        moving_average.name(),
        trend.name(),
        series.len()
    );
    let eoq = economic_order_quantity(10_000.0, 500.0, 2.0)?;

    let summary = serde_json::json!({
        "seed": seed,
        "training_days": series.len(),
        "horizon": horizon,
        "moving_average": ma_forecast.iter().take(5).collect::<Vec<_>>(),
        "linear_trend": trend_forecast.iter().take(5).collect::<Vec<_>>(),
        "eoq": eoq,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
