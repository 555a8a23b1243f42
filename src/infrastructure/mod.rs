// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_export;
pub mod power_client;
pub mod random;
