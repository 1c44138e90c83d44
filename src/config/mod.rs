//! Configuration loading and management for the salary package engine.
//!
//! This module provides the [`TaxSchedule`] every calculation is
//! parameterized by, and a loader that reads it from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_package::config::ScheduleLoader;
//!
//! let loader = ScheduleLoader::load("./config/de_2025").unwrap();
//! println!("Loaded schedule: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ScheduleLoader;
pub use types::{
    Adjustments, BenefitRules, OvertimeRules, RateBracket, ScheduleMetadata, TaxSchedule,
    TaxTable, VacationRules, WorkingHoursRules,
};
