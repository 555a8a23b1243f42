// Domain layer - Core models and pure transforms
pub mod dashboard;
pub mod prediction;
pub mod session;
pub mod timeseries;
pub mod weather;
