pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod meals;
pub mod plans;
pub mod posts;
pub mod seed;
pub mod state;
pub mod store;
pub mod users;
