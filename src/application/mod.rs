// App state driven by the UI event loop
pub mod app;

// Prediction over the fitted model
pub mod predictor;

// Synthetic data generation and model fitting
pub mod trainer;
