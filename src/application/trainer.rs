use crate::domain::features::FeatureField;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use tracing::info;

/// Fixed seed so every process start fits the exact same model.
const SEED: u64 = 42;
const N_SAMPLES: usize = 1000;
const TRAIN_FRACTION: f64 = 0.8;

const PRICE_PER_SQFT: f64 = 12_000.0;
const NOISE_STD: f64 = 5_000_000.0;

pub type FittedRegression = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Per-feature standardization statistics captured from the training split.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalerState {
    mean: [f64; FeatureField::COUNT],
    std: [f64; FeatureField::COUNT],
}

impl ScalerState {
    /// Fits mean and population standard deviation per column.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let n = rows.len().max(1) as f64;
        let mut mean = [0.0; FeatureField::COUNT];
        let mut std = [0.0; FeatureField::COUNT];

        for row in rows {
            for (col, value) in row.iter().enumerate() {
                mean[col] += value;
            }
        }
        for m in mean.iter_mut() {
            *m /= n;
        }

        for row in rows {
            for (col, value) in row.iter().enumerate() {
                std[col] += (value - mean[col]).powi(2);
            }
        }
        for s in std.iter_mut() {
            *s = (*s / n).sqrt();
            // A constant column standardizes to zero, not NaN.
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self { mean, std }
    }

    /// Standardizes one feature row as `(x - mean) / std`.
    pub fn transform(&self, values: &[f64; FeatureField::COUNT]) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .map(|(col, value)| (value - self.mean[col]) / self.std[col])
            .collect()
    }

    fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(col, value)| (value - self.mean[col]) / self.std[col])
            .collect()
    }
}

/// The immutable artifacts shared by every prediction request.
pub struct TrainedModel {
    pub scaler: ScalerState,
    pub regression: FittedRegression,
}

/// Generates the synthetic dataset and fits scaler + OLS regression.
///
/// Runs once at startup. Any failure here is fatal to the process.
pub fn train() -> anyhow::Result<TrainedModel> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let noise = Normal::new(0.0, NOISE_STD).context("building noise distribution")?;

    let mut x: Vec<Vec<f64>> = Vec::with_capacity(N_SAMPLES);
    let mut y: Vec<f64> = Vec::with_capacity(N_SAMPLES);

    for _ in 0..N_SAMPLES {
        let square_footage = rng.random_range(500.0..4000.0);
        let bedrooms = rng.random_range(1..=5) as f64;
        let bathrooms = rng.random_range(1..=4) as f64;
        let location_rating = rng.random_range(1.0..10.0);
        let floor_number = rng.random_range(1..=19) as f64;
        let parking_spots = rng.random_range(0..=2) as f64;
        let swimming_pool = rng.random_range(0..=1) as f64;
        let security_rating = rng.random_range(1.0..10.0);

        let price = square_footage * PRICE_PER_SQFT
            + bedrooms * 1_000_000.0
            + bathrooms * 800_000.0
            + location_rating * 500_000.0
            + floor_number * 50_000.0
            + parking_spots * 300_000.0
            + swimming_pool * 1_000_000.0
            + security_rating * 250_000.0
            + noise.sample(&mut rng);

        x.push(vec![
            square_footage,
            bedrooms,
            bathrooms,
            location_rating,
            floor_number,
            parking_spots,
            swimming_pool,
            security_rating,
        ]);
        y.push(price);
    }

    // Rows are i.i.d., so a plain prefix cut is as good as a shuffled split.
    // The held-out tail is unused: model evaluation is out of scope.
    let split = (N_SAMPLES as f64 * TRAIN_FRACTION).floor() as usize;
    let x_train = &x[..split];
    let y_train = y[..split].to_vec();

    let scaler = ScalerState::fit(x_train);
    let scaled: Vec<Vec<f64>> = x_train.iter().map(|row| scaler.transform_row(row)).collect();

    let x_matrix =
        DenseMatrix::from_2d_vec(&scaled).map_err(|e| anyhow::anyhow!("Matrix error: {}", e))?;
    let regression =
        LinearRegression::fit(&x_matrix, &y_train, LinearRegressionParameters::default())
            .map_err(|e| anyhow::anyhow!("Training error: {}", e))?;

    info!("Fitted price model on {} synthetic samples", split);

    Ok(TrainedModel { scaler, regression })
}
