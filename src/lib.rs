//! HR Payroll Engine
//!
//! This crate computes employee salaries from attendance records and
//! department pay rates, and provides the HR record services (employees,
//! departments, attendance) that feed the computation.

#![warn(missing_docs)]

pub mod access;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod state;
pub mod store;
