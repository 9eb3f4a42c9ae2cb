pub mod app;
pub mod cleaner;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod languages;
pub mod llm_client;
pub mod models;
pub mod rate_limit;
pub mod service;
