//! Page behavior for the portfolio site.
//!
//! [`controller::UiController`] receives [`folio_protocol::PageEvent`]s and
//! answers with [`folio_protocol::DomCommand`]s. The decisions themselves
//! live in [`rules`] and [`model`] as plain functions and small state types,
//! so none of this needs a browser to test.

pub mod config;
pub mod controller;
pub mod model;
pub mod rules;
pub mod schedule;

pub use config::{ConfigError, PortfolioConfig};
pub use controller::UiController;
