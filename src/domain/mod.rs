// Historical observations
pub mod market;

// Fitted model, feature layout and solver selection
pub mod ml;

// Fit diagnostics
pub mod performance;

// Domain-specific error types
pub mod errors;
