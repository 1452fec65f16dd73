pub mod aggregator;
pub mod api;
pub mod cache;
pub mod config;
pub mod data_models;
pub mod openlibrary;
pub mod wikipedia;
