use crate::application::predictor::PricePredictor;
use crate::application::trainer::TrainedModel;
use crate::domain::features::FeatureField;
use std::collections::HashMap;
use tracing::debug;

const DEFAULT_STATUS: &str = "Enter property details and click Calculate";

/// Message shown under the form, red when it reports a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::info(DEFAULT_STATUS)
    }
}

/// Count-up animation state for the result popup.
///
/// Advances by a twentieth of the target per tick, so the reveal takes the
/// same number of frames regardless of magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceReveal {
    target: u64,
    current: u64,
}

impl PriceReveal {
    pub fn new(target: u64) -> Self {
        Self { target, current: 0 }
    }

    pub fn tick(&mut self) {
        let step = (self.target / 20).max(1);
        self.current = (self.current + step).min(self.target);
    }

    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }
}

/// UI-facing application state: the trained model plus the form contents.
pub struct EstimatorApp {
    predictor: PricePredictor,
    pub inputs: HashMap<FeatureField, String>,
    pub status: StatusLine,
    pub reveal: Option<PriceReveal>,
}

impl EstimatorApp {
    pub fn new(model: TrainedModel) -> Self {
        Self {
            predictor: PricePredictor::new(model),
            inputs: FeatureField::ALL
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
            status: StatusLine::default(),
            reveal: None,
        }
    }

    /// Calculate button: run the full estimate and open the result popup.
    pub fn calculate(&mut self) {
        match self.predictor.estimate(&self.inputs) {
            Ok(estimate) => {
                debug!("Calculate -> ₹ {}", estimate.display);
                self.status = StatusLine::info(format!("Estimated price: ₹ {}", estimate.display));
                self.reveal = Some(PriceReveal::new(estimate.rupees));
            }
            Err(err) => {
                debug!("Calculate rejected: {}", err);
                self.status = StatusLine::error(err.to_string());
                self.reveal = None;
            }
        }
    }

    /// Reset button: clear every field and the status line.
    pub fn reset(&mut self) {
        for value in self.inputs.values_mut() {
            value.clear();
        }
        self.status = StatusLine::default();
        self.reveal = None;
    }

    /// Save button: persistence is out of scope, this only reports that.
    pub fn save(&mut self) {
        self.status = StatusLine::info("Saving estimates is not supported yet.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::trainer::train;

    fn app_with_inputs(values: [&str; FeatureField::COUNT]) -> EstimatorApp {
        let mut app = EstimatorApp::new(train().unwrap());
        for (field, value) in FeatureField::ALL.iter().zip(values) {
            app.inputs.insert(*field, value.to_string());
        }
        app
    }

    #[test]
    fn test_calculate_opens_reveal_on_valid_input() {
        let mut app = app_with_inputs(["1800", "3", "2", "7.5", "4", "1", "1", "8"]);
        app.calculate();

        assert!(app.reveal.is_some());
        assert!(!app.status.is_error);
        assert!(app.status.text.starts_with("Estimated price: ₹ "));
    }

    #[test]
    fn test_calculate_reports_validation_error() {
        let mut app = app_with_inputs(["1800", "", "2", "7.5", "4", "1", "1", "8"]);
        app.calculate();

        assert!(app.reveal.is_none());
        assert!(app.status.is_error);
        assert_eq!(app.status.text, "Please enter a value for Bedrooms");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = app_with_inputs(["1800", "3", "2", "7.5", "4", "1", "1", "8"]);
        app.calculate();
        app.reset();

        assert!(app.reveal.is_none());
        assert_eq!(app.status, StatusLine::default());
        assert!(app.inputs.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_save_is_a_stub() {
        let mut app = app_with_inputs(["1800", "3", "2", "7.5", "4", "1", "1", "8"]);
        app.save();
        assert_eq!(app.status.text, "Saving estimates is not supported yet.");
        assert!(!app.status.is_error);
    }

    #[test]
    fn test_reveal_reaches_target_without_overshoot() {
        let mut reveal = PriceReveal::new(12_345_678);
        let mut ticks = 0;
        while !reveal.done() {
            reveal.tick();
            ticks += 1;
            assert!(reveal.current() <= 12_345_678);
            assert!(ticks <= 21, "reveal did not terminate");
        }
        assert_eq!(reveal.current(), 12_345_678);
    }

    #[test]
    fn test_reveal_terminates_for_tiny_targets() {
        // target / 20 rounds to zero; the step floor keeps it moving.
        let mut reveal = PriceReveal::new(7);
        let mut ticks = 0;
        while !reveal.done() {
            reveal.tick();
            ticks += 1;
            assert!(ticks <= 7);
        }
        assert_eq!(reveal.current(), 7);
    }

    #[test]
    fn test_reveal_with_zero_target_is_done_after_one_tick() {
        let mut reveal = PriceReveal::new(0);
        assert!(reveal.done());
        reveal.tick();
        assert_eq!(reveal.current(), 0);
    }
}
