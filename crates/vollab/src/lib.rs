//! `vollab` - Volunteer and admin coordination for regional diagnostic labs
//!
//! Volunteers browse labs by region, open a lab and report its visit status.
//! Administrators add, edit and remove labs per region. Everything runs
//! against an in-memory store behind a mock service with simulated latency.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod navigator;
pub mod screens;
pub mod service;
pub mod session;
pub mod store;

#[cfg(test)]
mod testing;

pub use app::App;
pub use config::Config;
pub use dashboard::{Dashboard, RegionBrowser};
pub use error::{Error, Result};
pub use i18n::{Catalog, Locale, MessageKey};
pub use logging::init_logging;
pub use model::{Identity, Lab, LabStatus, NewLab, Region, Report, Role};
pub use navigator::{Navigator, View};
pub use service::{LabService, MockService};
pub use session::Session;
pub use store::{LabStore, StoreStats};
