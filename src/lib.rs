pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod network;
pub mod store;
pub mod ui;
pub mod utils;
