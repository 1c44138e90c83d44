//! Core data models for the salary package engine.
//!
//! This module contains the profile a caller edits and the result the
//! calculator derives from it.

mod profile;
mod salary_result;

pub use profile::{CompensationProfile, TaxClass};
pub use salary_result::{AuditStep, AuditTrace, AuditWarning, SalaryResult};
