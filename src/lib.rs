//! Dynacolor - Material dynamic color themes from the command line
//!
//! Loads configuration and pixel sources, runs the `material-color`
//! pipeline and renders the result. This library exposes modules for
//! integration testing.

pub mod error;
pub mod models;
pub mod services;
