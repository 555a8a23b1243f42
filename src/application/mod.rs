// Application layer - Use cases and ports
pub mod dashboard_service;
pub mod prediction_service;
pub mod session_store;
pub mod weather_repository;
