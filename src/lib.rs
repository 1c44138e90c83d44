//! Salary Package Engine
//!
//! This crate computes a German salary package from a compensation profile
//! (vacation and part-time adjustments, overtime, taxable benefits, flat-rate
//! income tax) and persists profiles in passphrase-encrypted envelopes.
//!
//! ```
//! use salary_package::calculation::compute_salary;
//! use salary_package::models::CompensationProfile;
//! use salary_package::store::ProfileStore;
//!
//! let profile = CompensationProfile::default();
//! let result = compute_salary(&profile);
//! assert_eq!(result.net_salary.to_string(), "30691");
//!
//! let store = ProfileStore::new().with_kdf_costs(64, 1, 1);
//! let envelope = store.save(&profile, "passphrase").unwrap();
//! assert_eq!(store.load(envelope, "passphrase").unwrap(), profile);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
