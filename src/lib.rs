//! Client library for the news summary service: source listings, article
//! summaries, suggestion search and locally persisted subscriptions.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logger;
pub mod services;
pub mod storage;
