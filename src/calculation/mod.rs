//! Calculation logic for the salary package engine.
//!
//! This module contains one function per rule: vacation penalty, part-time
//! hours penalty, extra hours bonus, overtime bonus, taxable benefits,
//! adjusted gross income, and income tax. [`compute_salary`] runs them in
//! order and assembles the [`crate::models::SalaryResult`].

mod gross_income;
mod income_tax;
mod net_salary;
mod overtime_bonus;
mod rounding;
mod vacation_penalty;
mod validation;
mod working_hours;

pub use gross_income::{
    BenefitsValueResult, GrossAdjustedResult, SalaryAdjustments, calculate_benefits_value,
    calculate_gross_adjusted,
};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use net_salary::{compute_salary, compute_salary_with};
pub use overtime_bonus::{OvertimeBonusResult, calculate_overtime_bonus};
pub use rounding::round_currency;
pub use vacation_penalty::{VacationPenaltyResult, calculate_vacation_penalty};
pub use validation::{MAX_AMOUNT, MAX_OVERTIME_HOURS, MAX_WEEKLY_HOURS, validate_profile};
pub use working_hours::{
    ExtraHoursBonusResult, HoursPenaltyResult, calculate_extra_hours_bonus,
    calculate_hours_penalty,
};
