use homeworth::application::app::EstimatorApp;
use homeworth::application::trainer;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Homeworth Property Estimator...");

    // 2. Train the price model (blocking; the UI only launches once it is ready)
    let started = std::time::Instant::now();
    let model = trainer::train()?;
    info!("Price model ready in {:?}", started.elapsed());

    let app = EstimatorApp::new(model);

    // 3. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Homeworth Property Estimator"),
        ..Default::default()
    };

    eframe::run_native(
        "Homeworth Property Estimator",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
