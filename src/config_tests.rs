use crate::config::{Config, RegressionSolver};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: &[&str] = &[
    "DATA_PATH",
    "OPEN_COLUMN",
    "CLOSE_COLUMN",
    "TURNOVER_COLUMN",
    "REGRESSION_SOLVER",
];

fn set(key: &str, value: &str) {
    // SAFETY: env mutation is serialized by ENV_LOCK
    unsafe { env::set_var(key, value) };
}

fn clear_all() {
    for key in VARS {
        // SAFETY: env mutation is serialized by ENV_LOCK
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_path, PathBuf::from("HDFC.csv"));
    assert_eq!(config.columns.open, "Open");
    assert_eq!(config.columns.close, "Close");
    assert_eq!(config.columns.turnover, "Turnover");
    assert_eq!(config.solver, RegressionSolver::Normal);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();
    set("DATA_PATH", "/tmp/prices.csv");
    set("OPEN_COLUMN", "open_px");
    set("CLOSE_COLUMN", "close_px");
    set("TURNOVER_COLUMN", "value");
    set("REGRESSION_SOLVER", "svd");

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_path, PathBuf::from("/tmp/prices.csv"));
    assert_eq!(config.columns.open, "open_px");
    assert_eq!(config.columns.close, "close_px");
    assert_eq!(config.columns.turnover, "value");
    assert_eq!(config.solver, RegressionSolver::Svd);

    clear_all();
}

#[test]
fn test_invalid_solver_returns_error() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();
    set("REGRESSION_SOLVER", "ridge");

    let result = Config::from_env();

    assert!(result.is_err());
    let err_msg = format!("{:?}", result.err().unwrap());
    assert!(err_msg.contains("Invalid REGRESSION_SOLVER"));

    clear_all();
}
