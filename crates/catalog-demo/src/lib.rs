//! # Catalog Demo Library
//!
//! This library exposes the core modules of the application for integration
//! testing: the product/review models, their mirrored stores, configuration
//! loading, and the [`Catalog`](lifecycle::Catalog) wiring.

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod stores;
