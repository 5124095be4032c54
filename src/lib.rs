pub mod config;
pub mod dataset;
pub mod export;
pub mod regions;
pub mod state;
pub mod views;
