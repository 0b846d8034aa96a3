use anyhow::Context;
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;
use turnover_predictor::application::agents::user_agent::UserAgent;
use turnover_predictor::application::ml::regressor_factory::RegressorFactory;
use turnover_predictor::application::prediction_service::PredictionService;
use turnover_predictor::config::Config;
use turnover_predictor::infrastructure::data::CsvDataLoader;
use turnover_predictor::interfaces::ui::{PredictorApp, configure_style};

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Initializing Stock Turnover Prediction...");

    let config = Config::from_env().context("Failed to load config")?;

    // 2. Load data and fit once; without data there is nothing to show
    let loader = CsvDataLoader::new(config.columns.clone());
    let dataset = match loader.load_path(&config.data_path) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to load data: {}", e);
            return Err(e).with_context(|| format!("Cannot start without {:?}", config.data_path));
        }
    };

    let regressor = RegressorFactory::create(config.solver);
    let service = PredictionService::train(regressor.as_ref(), &dataset).map_err(|e| {
        error!("Failed to fit model: {}", e);
        anyhow::anyhow!(e)
    })?;

    let agent = UserAgent::new(service, dataset);

    // 3. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 780.0])
            .with_title("Stock Turnover Prediction"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Turnover Prediction",
        native_options,
        Box::new(|cc| {
            configure_style(&cc.egui_ctx);
            Ok(Box::new(PredictorApp::new(agent)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
