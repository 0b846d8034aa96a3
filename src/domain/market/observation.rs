use serde::{Deserialize, Serialize};

/// One historical trading day: opening rate, closing rate and turnover
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub open: f64,
    pub close: f64,
    pub turnover: f64,
}

impl Observation {
    pub fn new(open: f64, close: f64, turnover: f64) -> Self {
        Self {
            open,
            close,
            turnover,
        }
    }
}

/// Ordered, immutable collection of observations loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// (open, turnover) pairs in file order
    pub fn open_vs_turnover(&self) -> Vec<[f64; 2]> {
        self.observations
            .iter()
            .map(|o| [o.open, o.turnover])
            .collect()
    }

    /// (close, turnover) pairs in file order
    pub fn close_vs_turnover(&self) -> Vec<[f64; 2]> {
        self.observations
            .iter()
            .map(|o| [o.close, o.turnover])
            .collect()
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}
