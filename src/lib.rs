//! Trend scraper front-end.
//!
//! Fetches the latest trending topics from the local scraper and renders
//! them in the browser. Modules are public so the binary and tests share
//! one copy.

pub mod app;
pub mod config;
pub mod run;
pub mod trends;
pub mod view;
