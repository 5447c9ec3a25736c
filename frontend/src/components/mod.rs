pub mod connection;
pub mod create_campaign;
pub mod dashboard;
pub mod navigation;
pub mod welcome;
