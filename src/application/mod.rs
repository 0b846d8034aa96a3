// Form state driving the desktop window
pub mod agents;

// Regression backends
pub mod ml;

// Parse, predict and format on demand
pub mod prediction_service;
