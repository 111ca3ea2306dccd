//! Flicks - a terminal movie browser
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod effects;
pub mod error;
pub mod fetch;
pub mod input;
pub mod logging;
pub mod models;
pub mod router;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
