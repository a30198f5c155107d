//! Configuration loading and management for the HR payroll engine.
//!
//! This module loads organisation settings, the deduction policy and the
//! departments to seed at start-up from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded payroll for: {}", config.settings().organization);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DepartmentsConfig, PayrollConfig, PayrollSettings};
