pub mod ols_regressor;
pub mod predictor;
pub mod regressor_factory;
pub mod smartcore_regressor;
