//! Integration tests for the Salary Package Engine.
//!
//! This test suite covers:
//! - Salary computation scenarios against the shipped schedule
//! - Schedule loading from YAML
//! - Sealed save/load through a session and a directory transport
//! - Legacy plain-JSON packages
//! - The load error taxonomy and tamper detection

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::fs;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tempfile::TempDir;

use salary_package::calculation::{
    MAX_AMOUNT, MAX_OVERTIME_HOURS, MAX_WEEKLY_HOURS, compute_salary, compute_salary_with,
};
use salary_package::config::{ScheduleLoader, TaxSchedule};
use salary_package::crypto::SecureString;
use salary_package::error::EngineError;
use salary_package::models::{CompensationProfile, TaxClass};
use salary_package::session::{DirectoryTransport, InteractionProvider, PackageSession, PackageTransport};
use salary_package::store::{PackagePayload, ProfileStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn light_store() -> ProfileStore {
    ProfileStore::new().with_kdf_costs(64, 1, 1)
}

fn sample_profile() -> CompensationProfile {
    CompensationProfile {
        base_salary: decimal("57500"),
        vacation_days: 32,
        working_hours_per_week: decimal("36"),
        overtime_hours: decimal("14.5"),
        performance_bonus: decimal("3000"),
        has_company_car: false,
        has_job_bike: true,
        tax_class: TaxClass::III,
    }
}

fn legacy_document(overrides: Value) -> String {
    let mut document = json!({
        "baseSalary": 40000,
        "vacationDays": 28,
        "workingHours": 40,
        "overtimeHours": 0,
        "companyCar": false,
        "jobBike": false,
        "performanceBonus": 0,
        "selectedTaxClass": 1,
        "netSalary": 30691,
        "taxAmount": 9309
    });
    if let (Some(target), Some(source)) = (document.as_object_mut(), overrides.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    document.to_string()
}

/// Answers every prompt with the same file name and passphrase.
struct FixedAnswers {
    file_name: &'static str,
    passphrase: Option<&'static str>,
}

impl InteractionProvider for FixedAnswers {
    fn request_file_name(&mut self, _suggested: &str) -> Option<String> {
        Some(self.file_name.to_string())
    }

    fn request_passphrase(&mut self) -> Option<SecureString> {
        self.passphrase.map(SecureString::from)
    }
}

// =============================================================================
// SECTION 1: Computation Scenarios
// =============================================================================

#[test]
fn test_baseline_profile() {
    let result = compute_salary(&CompensationProfile::default());

    assert_eq!(result.gross_adjusted, decimal("40000"));
    assert_eq!(result.tax_free_amount, decimal("10908"));
    assert_eq!(result.taxable_income, decimal("29092"));
    assert_eq!(result.tax_rate, decimal("0.32"));
    assert_eq!(result.tax_amount, decimal("9309"));
    assert_eq!(result.net_salary, decimal("30691"));
    assert!(result.audit.warnings.is_empty());
}

#[test]
fn test_thirty_five_vacation_days() {
    let profile = CompensationProfile {
        vacation_days: 35,
        ..CompensationProfile::default()
    };
    let result = compute_salary(&profile);

    assert_eq!(result.vacation_penalty, decimal("750"));
    assert_eq!(result.gross_adjusted, decimal("39250"));
    assert_eq!(result.taxable_income, decimal("28342"));
    assert_eq!(result.tax_amount, decimal("9069"));
    assert_eq!(result.net_salary, decimal("30181"));
}

#[test]
fn test_tax_class_five_has_no_allowance() {
    let profile = CompensationProfile {
        base_salary: decimal("50000"),
        tax_class: TaxClass::V,
        ..CompensationProfile::default()
    };
    let result = compute_salary(&profile);

    assert_eq!(result.tax_free_amount, Decimal::ZERO);
    assert_eq!(result.taxable_income, decimal("50000"));
    assert_eq!(result.tax_amount, decimal("16000"));
    assert_eq!(result.net_salary, decimal("34000"));
}

#[test]
fn test_tax_class_two_in_lower_bracket() {
    let profile = CompensationProfile {
        base_salary: decimal("20000"),
        tax_class: TaxClass::II,
        ..CompensationProfile::default()
    };
    let result = compute_salary(&profile);

    // (20000 - 15168) x 0.24 = 1159.68
    assert_eq!(result.tax_rate, decimal("0.24"));
    assert_eq!(result.tax_amount, decimal("1160"));
    assert_eq!(result.net_salary, decimal("18840"));
}

#[test]
fn test_overtime_paid_per_hour() {
    let profile = CompensationProfile {
        overtime_hours: decimal("20"),
        ..CompensationProfile::default()
    };
    let result = compute_salary(&profile);

    assert_eq!(result.overtime_bonus, decimal("600"));
    assert_eq!(result.gross_adjusted, decimal("40600"));
    assert_eq!(result.tax_amount, decimal("9501"));
    assert_eq!(result.net_salary, decimal("31099"));
}

#[test]
fn test_income_below_allowance_is_untaxed() {
    let profile = CompensationProfile {
        base_salary: decimal("10000"),
        ..CompensationProfile::default()
    };
    let result = compute_salary(&profile);

    assert_eq!(result.taxable_income, Decimal::ZERO);
    assert_eq!(result.tax_amount, Decimal::ZERO);
    assert_eq!(result.net_salary, decimal("10000"));
}

#[test]
fn test_result_serializes_with_audit_trace() {
    let result = compute_salary(&CompensationProfile::default());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["net_salary"], "30691");
    assert_eq!(json["audit"]["steps"].as_array().unwrap().len(), 10);
}

// =============================================================================
// SECTION 2: Schedule Loading
// =============================================================================

#[test]
fn test_shipped_schedule_matches_builtin() {
    let loader = ScheduleLoader::load("./config/de_2025").expect("Failed to load config");

    assert_eq!(loader.schedule(), &TaxSchedule::default());
    assert_eq!(loader.metadata().currency, "EUR");
}

#[test]
fn test_loaded_schedule_gives_same_results() {
    let schedule = ScheduleLoader::load("./config/de_2025")
        .unwrap()
        .into_schedule();

    for profile in [CompensationProfile::default(), sample_profile()] {
        assert_eq!(
            compute_salary_with(&profile, &schedule),
            compute_salary(&profile)
        );
    }
}

#[test]
fn test_missing_schedule_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    assert!(matches!(
        ScheduleLoader::load(temp_dir.path()),
        Err(EngineError::ConfigNotFound { .. })
    ));
}

// =============================================================================
// SECTION 3: Session Save and Load
// =============================================================================

#[test]
fn test_session_round_trip_through_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut transport = DirectoryTransport::new(temp_dir.path());
    let mut user = FixedAnswers {
        file_name: "gehaltspaket",
        passphrase: Some("tr0ub4dor"),
    };

    let mut saver = PackageSession::new(light_store());
    saver.update_profile(sample_profile()).unwrap();
    let saved = saver.save(&mut user, &mut transport).unwrap();
    assert_eq!(saved.as_deref(), Some("gehaltspaket"));

    let on_disk = fs::read_to_string(temp_dir.path().join("gehaltspaket.json")).unwrap();
    assert!(on_disk.starts_with("{\"salary_package_envelope\""));
    assert!(!on_disk.contains("baseSalary"));

    let mut loader = PackageSession::new(light_store());
    assert!(loader.load(&mut user, &mut transport).unwrap());
    assert_eq!(loader.profile(), &sample_profile());
    assert_eq!(loader.result(), saver.result());
}

#[test]
fn test_session_loads_legacy_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("old.json"),
        legacy_document(json!({ "vacationDays": 35, "netSalary": 30181, "taxAmount": 9069 })),
    )
    .unwrap();

    let mut session = PackageSession::new(light_store());
    let mut user = FixedAnswers {
        file_name: "old",
        passphrase: None,
    };

    assert!(session
        .load(&mut user, &mut DirectoryTransport::new(temp_dir.path()))
        .unwrap());
    assert_eq!(session.profile().vacation_days, 35);
    assert_eq!(session.result().net_salary, decimal("30181"));
}

#[test]
fn test_session_wrong_passphrase_keeps_state() {
    let temp_dir = TempDir::new().unwrap();
    let mut transport = DirectoryTransport::new(temp_dir.path());

    let mut saver = PackageSession::new(light_store());
    saver.update_profile(sample_profile()).unwrap();
    saver
        .save(
            &mut FixedAnswers {
                file_name: "p",
                passphrase: Some("right"),
            },
            &mut transport,
        )
        .unwrap();

    let mut session = PackageSession::new(light_store());
    let result = session.load(
        &mut FixedAnswers {
            file_name: "p",
            passphrase: Some("wrong"),
        },
        &mut transport,
    );

    assert!(matches!(result, Err(EngineError::Decryption { .. })));
    assert_eq!(session.profile(), &CompensationProfile::default());
    assert_eq!(session.result().net_salary, decimal("30691"));
}

#[test]
fn test_transport_rejects_nested_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let mut transport = DirectoryTransport::new(temp_dir.path());

    assert!(matches!(
        transport.write("../outside", b"{}"),
        Err(EngineError::Validation { .. })
    ));
}

// =============================================================================
// SECTION 4: Error Taxonomy
// =============================================================================

#[test]
fn test_not_json_is_parse_error() {
    let result = light_store().load("<xml/>".to_string(), "pw");
    assert!(matches!(result, Err(EngineError::Parse { .. })));
}

#[test]
fn test_missing_field_is_parse_error() {
    let mut document: Value = serde_json::from_str(&legacy_document(json!({}))).unwrap();
    document.as_object_mut().unwrap().remove("jobBike");

    let result = light_store().load(document.to_string(), "pw");
    assert!(matches!(result, Err(EngineError::Parse { .. })));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let result = light_store().load(legacy_document(json!({ "companyCar": "yes" })), "pw");
    assert!(matches!(result, Err(EngineError::Parse { .. })));
}

#[test]
fn test_decimal_strings_are_accepted() {
    let profile = light_store()
        .load(
            legacy_document(json!({ "baseSalary": "41000.50", "workingHours": "38.5" })),
            "",
        )
        .unwrap();

    assert_eq!(profile.base_salary, decimal("41000.50"));
    assert_eq!(profile.working_hours_per_week, decimal("38.5"));
}

#[test]
fn test_out_of_range_values_are_validation_errors() {
    for overrides in [
        json!({ "selectedTaxClass": 0 }),
        json!({ "selectedTaxClass": 7 }),
        json!({ "vacationDays": -1 }),
        json!({ "baseSalary": -40000 }),
        json!({ "workingHours": -5 }),
        json!({ "overtimeHours": -0.5 }),
        json!({ "performanceBonus": -1 }),
    ] {
        let result = light_store().load(legacy_document(overrides.clone()), "");
        assert!(
            matches!(result, Err(EngineError::Validation { .. })),
            "Expected Validation error for {}, got {:?}",
            overrides,
            result
        );
    }
}

#[test]
fn test_wrong_passphrase_is_decryption_error() {
    let store = light_store();
    let envelope = store.save(&sample_profile(), "alpha").unwrap();

    assert!(matches!(
        store.load(envelope, "beta"),
        Err(EngineError::Decryption { .. })
    ));
}

#[test]
fn test_truncated_envelope_fails() {
    let store = light_store();
    let bytes = store.save(&sample_profile(), "pw").unwrap().into_bytes();

    let result = store.load(bytes[..bytes.len() / 2].to_vec(), "pw");
    assert!(matches!(result, Err(EngineError::Parse { .. })));
}

#[test]
fn test_every_flipped_byte_is_detected() {
    let store = light_store();
    let original = store.save(&sample_profile(), "pw").unwrap().into_bytes();

    for index in 0..original.len() {
        let mut tampered = original.clone();
        tampered[index] ^= 0x01;

        let result = store.load(PackagePayload::Bytes(tampered), "pw");
        assert!(
            matches!(
                result,
                Err(EngineError::Decryption { .. }) | Err(EngineError::Parse { .. })
            ),
            "Flipping byte {} ({:?}) was not detected: {:?}",
            index,
            original[index] as char,
            result
        );
    }
}

#[test]
fn test_hostile_kdf_header_fails_fast() {
    let store = light_store();
    let envelope = store.save(&sample_profile(), "pw").unwrap();
    let original: Value = serde_json::from_slice(envelope.as_bytes()).unwrap();

    for (field, hostile) in [
        ("time_cost", json!(4_000_000_000u32)),
        ("memory_cost", json!(u32::MAX)),
        ("parallelism", json!(1_000)),
    ] {
        let mut document = original.clone();
        document["salary_package_envelope"]["kdf"][field] = hostile;

        let started = Instant::now();
        let result = ProfileStore::new().load(document.to_string(), "pw");

        assert!(
            matches!(result, Err(EngineError::Decryption { .. })),
            "Expected Decryption error for {}, got {:?}",
            field,
            result
        );
        assert!(started.elapsed() < Duration::from_secs(5), "{} was not rejected quickly", field);
    }
}

#[test]
fn test_extreme_amounts_are_rejected_not_panicking() {
    for overrides in [
        json!({ "baseSalary": "79228162514264337593543950335", "companyCar": true }),
        json!({ "performanceBonus": "79228162514264337593543950335" }),
        json!({ "workingHours": "79228162514264337593543950335" }),
        json!({ "overtimeHours": "79228162514264337593543950335" }),
        json!({ "vacationDays": 4294967295u32, "baseSalary": "1000000000000.5" }),
    ] {
        let result = light_store().load(legacy_document(overrides.clone()), "");
        assert!(
            matches!(result, Err(EngineError::Validation { .. })),
            "Expected Validation error for {}, got {:?}",
            overrides,
            result
        );
    }
}

#[test]
fn test_largest_valid_profile_round_trips() {
    let profile = CompensationProfile {
        base_salary: MAX_AMOUNT,
        vacation_days: u32::MAX,
        working_hours_per_week: MAX_WEEKLY_HOURS,
        overtime_hours: MAX_OVERTIME_HOURS,
        performance_bonus: MAX_AMOUNT,
        has_company_car: true,
        has_job_bike: true,
        tax_class: TaxClass::VI,
    };
    let store = light_store();

    let envelope = store.save(&profile, "pw").unwrap();
    assert_eq!(store.load(envelope, "pw").unwrap(), profile);
}

// =============================================================================
// SECTION 5: Properties
// =============================================================================

fn profile_strategy() -> impl Strategy<Value = CompensationProfile> {
    (
        0i64..20_000_000,
        0u32..60,
        0i64..600,
        0i64..2_000,
        0i64..2_000_000,
        any::<bool>(),
        any::<bool>(),
        0usize..TaxClass::ALL.len(),
    )
        .prop_map(
            |(salary, days, hours, overtime, bonus, car, bike, class)| CompensationProfile {
                base_salary: Decimal::new(salary, 2),
                vacation_days: days,
                working_hours_per_week: Decimal::new(hours, 1),
                overtime_hours: Decimal::new(overtime, 1),
                performance_bonus: Decimal::new(bonus, 2),
                has_company_car: car,
                has_job_bike: bike,
                tax_class: TaxClass::ALL[class],
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_save_then_load_restores_profile(
        profile in profile_strategy(),
        passphrase in "[ -~]{1,24}",
    ) {
        let store = light_store();
        let envelope = store.save(&profile, &passphrase).unwrap();

        prop_assert_eq!(store.load(envelope, &passphrase).unwrap(), profile);
    }

    #[test]
    fn prop_net_salary_is_whole_and_tax_non_negative(profile in profile_strategy()) {
        let result = compute_salary(&profile);

        prop_assert!(result.tax_amount >= Decimal::ZERO);
        prop_assert_eq!(result.net_salary, result.net_salary.trunc());
        prop_assert_eq!(result.tax_amount, result.tax_amount.trunc());
    }
}
