pub mod contract;
pub mod errors;
pub mod models;
pub mod types;
