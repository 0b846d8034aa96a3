// Historical market observations
pub mod observation;
