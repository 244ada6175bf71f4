//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs describing a finished
//! notification run, consumed by the report formatters.

pub mod run_report;
pub mod run_report_builder;

pub use run_report::{CounterView, DeliveryView, ProjectView, RunReport};
pub use run_report_builder::RunReportBuilder;
