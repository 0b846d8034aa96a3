use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::prelude::*;
use turnover_predictor::application::ml::regressor_factory::RegressorFactory;
use turnover_predictor::application::prediction_service::{Prediction, PredictionService};
use turnover_predictor::config::{Config, RegressionSolver};
use turnover_predictor::domain::ml::linear_model::LinearModel;
use turnover_predictor::domain::performance::fit_summary::FitSummary;
use turnover_predictor::infrastructure::data::CsvDataLoader;

#[derive(Parser, Debug)]
#[command(author, version, about = "Predict stock turnover from Open/Close rates", long_about = None)]
struct Args {
    /// Opening rate
    #[arg(long, allow_hyphen_values = true)]
    open: String,

    /// Closing rate
    #[arg(long, allow_hyphen_values = true)]
    close: String,

    /// Path to historical data CSV (overrides DATA_PATH)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Least-squares solver: normal, qr or svd (overrides REGRESSION_SOLVER)
    #[arg(long)]
    solver: Option<RegressionSolver>,

    /// Print a JSON report instead of the display line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    prediction: &'a Prediction,
    display: String,
    model: &'a LinearModel,
    fit: &'a FitSummary,
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let mut config = Config::from_env().context("Failed to load config")?;
    if let Some(path) = args.data {
        config.data_path = path;
    }
    if let Some(solver) = args.solver {
        config.solver = solver;
    }

    let dataset = CsvDataLoader::new(config.columns.clone())
        .load_path(&config.data_path)
        .with_context(|| format!("Cannot load {:?}", config.data_path))?;

    let regressor = RegressorFactory::create(config.solver);
    let service = PredictionService::train(regressor.as_ref(), &dataset)?;

    let prediction = match service.submit(&args.open, &args.close) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(2));
        }
    };

    if args.json {
        let report = Report {
            prediction: &prediction,
            display: prediction.display(),
            model: service.model(),
            fit: service.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", prediction.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
