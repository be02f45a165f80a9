pub mod clients;
pub mod configuration;
pub mod domain;
pub mod models;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod utils;
