//! Demand forecasting helpers.
//!
//! Forecasters are black boxes behind `Forecaster`: fit on a training
//! series, then predict a horizon. The implementations here are plain
//! statistical baselines; nothing evaluates or persists a model.

use crate::{
    error::{PipelineError, PipelineResult},
    rng::DatasetRng,
};
use chrono::NaiveDate;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

pub const SAMPLE_DEMAND_LAMBDA: f64 = 200.0;

/// One day of the synthetic forecasting series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandObservation {
    pub date: NaiveDate,
    pub demand: u64,
    pub weather: i64,
    pub economy_index: f64,
}

/// Daily demand ~ Poisson(200), weather in 60..100, economy index ~ N(100, 10).
pub fn sample_demand_series(
    rng: &mut DatasetRng,
    start: NaiveDate,
    days: usize,
) -> PipelineResult<Vec<DemandObservation>> {
    start
        .iter_days()
        .take(days)
        .map(|date| -> PipelineResult<DemandObservation> {
            Ok(DemandObservation {
                date,
                demand: rng.poisson(SAMPLE_DEMAND_LAMBDA)?,
                weather: rng.int_range(60, 100),
                economy_index: rng.normal(100.0, 10.0)?,
            })
        })
        .collect()
}

pub trait Forecaster {
    type Model;

    fn name(&self) -> &'static str;

    fn fit(&self, training: &[f64]) -> PipelineResult<Self::Model>;

    fn predict(&self, model: &Self::Model, horizon: usize) -> Vec<f64>;
}

/// Flat forecast at the mean of the trailing window.
pub struct MovingAverageForecaster {
    pub window: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverageModel {
    pub level: f64,
}

impl Forecaster for MovingAverageForecaster {
    type Model = MovingAverageModel;

    fn name(&self) -> &'static str {
        "moving_average"
    }

    fn fit(&self, training: &[f64]) -> PipelineResult<MovingAverageModel> {
        if self.window == 0 || training.len() < self.window {
            return Err(PipelineError::invalid(
                "forecast",
                "training",
                format!(
                    "window {} needs at least that many points, got {}",
                    self.window,
                    training.len()
                ),
            ));
        }
        let tail = &training[training.len() - self.window..];
        Ok(MovingAverageModel {
            level: tail.iter().sum::<f64>() / self.window as f64,
        })
    }

    fn predict(&self, model: &MovingAverageModel, horizon: usize) -> Vec<f64> {
        vec![model.level; horizon]
    }
}

/// Least-squares line through (t, y), solved by SVD, extrapolated forward.
pub struct LinearTrendForecaster;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearTrendModel {
    pub intercept: f64,
    pub slope: f64,
    /// Number of training points; forecasts start at t = observations.
    pub observations: usize,
}

impl Forecaster for LinearTrendForecaster {
    type Model = LinearTrendModel;

    fn name(&self) -> &'static str {
        "linear_trend"
    }

    fn fit(&self, training: &[f64]) -> PipelineResult<LinearTrendModel> {
        let n = training.len();
        if n < 2 {
            return Err(PipelineError::invalid(
                "forecast",
                "training",
                format!("linear trend needs at least 2 points, got {n}"),
            ));
        }

        let design = DMatrix::from_fn(n, 2, |t, col| if col == 0 { 1.0 } else { t as f64 });
        let observed = DVector::from_column_slice(training);
        let coefficients = design
            .svd(true, true)
            .solve(&observed, f64::EPSILON)
            .map_err(|e| PipelineError::invalid("forecast", "training", e))?;

        Ok(LinearTrendModel {
            intercept: coefficients[0],
            slope: coefficients[1],
            observations: n,
        })
    }

    fn predict(&self, model: &LinearTrendModel, horizon: usize) -> Vec<f64> {
        (0..horizon)
            .map(|h| model.intercept + model.slope * (model.observations + h) as f64)
            .collect()
    }
}

/// Fit then predict in one call.
pub fn forecast<F: Forecaster>(
    forecaster: &F,
    training: &[f64],
    horizon: usize,
) -> PipelineResult<Vec<f64>> {
    let model = forecaster.fit(training)?;
    Ok(forecaster.predict(&model, horizon))
}

/// Economic Order Quantity: sqrt(2·D·S / H), rounded to cents.
pub fn economic_order_quantity(
    demand_rate: f64,
    setup_cost: f64,
    holding_cost: f64,
) -> PipelineResult<f64> {
    if holding_cost <= 0.0 {
        return Err(PipelineError::invalid(
            "eoq",
            "holding_cost",
            format!("must be positive, got {holding_cost}"),
        ));
    }
    if demand_rate < 0.0 || setup_cost < 0.0 {
        return Err(PipelineError::invalid(
            "eoq",
            "demand_rate",
            "demand rate and setup cost must be non-negative",
        ));
    }
    let eoq = (2.0 * demand_rate * setup_cost / holding_cost).sqrt();
    Ok((eoq * 100.0).round() / 100.0)
}
