use crate::application::trainer::TrainedModel;
use crate::domain::currency::format_inr;
use crate::domain::errors::{EstimateError, ValidationError};
use crate::domain::features::{FeatureField, FeatureVector};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::collections::HashMap;
use tracing::debug;

/// A formatted, display-ready price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceEstimate {
    pub rupees: u64,
    pub display: String,
}

/// Runs validated feature vectors through the fitted scaler + regression.
pub struct PricePredictor {
    model: TrainedModel,
}

impl PricePredictor {
    pub fn new(model: TrainedModel) -> Self {
        Self { model }
    }

    /// Checks the raw form inputs and assembles them in model column order.
    ///
    /// Absent and blank entries are equivalent; the first offending field
    /// (in column order) wins.
    pub fn validate(
        raw: &HashMap<FeatureField, String>,
    ) -> Result<FeatureVector, ValidationError> {
        let mut values = [0.0; FeatureField::COUNT];
        for (col, field) in FeatureField::ALL.iter().enumerate() {
            let text = raw.get(field).map(|s| s.trim()).unwrap_or("");
            if text.is_empty() {
                return Err(ValidationError::MissingField {
                    field: field.label(),
                });
            }
            let value: f64 = text.parse().map_err(|_| ValidationError::NotANumber {
                field: field.label(),
            })?;
            if value < 0.0 {
                return Err(ValidationError::NegativeValue {
                    field: field.label(),
                });
            }
            values[col] = value;
        }
        Ok(FeatureVector(values))
    }

    /// Predicts a raw price for an already validated feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, EstimateError> {
        let scaled = self.model.scaler.transform(&features.0);
        let input_matrix = DenseMatrix::from_2d_vec(&vec![scaled]).map_err(|e| {
            EstimateError::Model {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        let predictions =
            self.model
                .regression
                .predict(&input_matrix)
                .map_err(|e| EstimateError::Model {
                    reason: e.to_string(),
                })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| EstimateError::Model {
                reason: "No prediction returned".to_string(),
            })
    }

    /// Full request path: validate, predict, format.
    pub fn estimate(
        &self,
        raw: &HashMap<FeatureField, String>,
    ) -> Result<PriceEstimate, EstimateError> {
        let features = Self::validate(raw)?;
        let price = self.predict(&features)?;

        let rupees = price.abs().trunc() as u64;
        let display_text = format_inr(rupees);
        debug!("Estimated property price {:.0} -> ₹ {}", price, display_text);

        Ok(PriceEstimate {
            rupees,
            display: display_text,
        })
    }
}
