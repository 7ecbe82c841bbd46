// 📐 Schema Validation - Strict dataset decoding
//
// Two passes over the raw JSON document:
//   1. Shape pass: typed serde decode with closed objects (unknown keys are
//      an error, not silently dropped) and closed enums.
//   2. Constraint pass: absolute URLs, 2-letter country codes, UUID ids,
//      duplicate-id detection. All violations are collected, not just the
//      first one.
//
// Dangling app references are NOT schema errors; they are tolerated at
// render time (see model::bank::BankBrand::resolved_apps).

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::model::{Bank, BankBrand, BankingApp, Dataset, MerchantBrand, SCHEMA_VERSION};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// A single constraint violation, addressed by JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Fatal validation failure. The caller must surface a "data failed to
/// load" state; there is no partial recovery.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("dataset does not match expected shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("unsupported schema version {found} (expected {expected})")]
    Version { found: u64, expected: u32 },

    #[error("dataset failed validation with {} error(s)", .0.len())]
    Constraints(Vec<FieldError>),
}

impl SchemaError {
    /// All field errors, for rendering a readable failure list.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SchemaError::Constraints(errors) => errors,
            _ => &[],
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate an untyped JSON document against the dataset shape.
///
/// Pure: no I/O, no side effects. Returns a fully-typed [`Dataset`] or the
/// first fatal error class encountered (version, then shape, then the full
/// list of constraint violations).
pub fn validate(raw: Value) -> Result<Dataset, SchemaError> {
    // Version tag check first so a future generation fails with a clear
    // message instead of a pile of shape errors. Absent means current
    // (published snapshots predate the tag).
    if let Some(version) = raw.get("schemaVersion") {
        match version.as_u64() {
            Some(v) if v == SCHEMA_VERSION as u64 => {}
            Some(v) => {
                return Err(SchemaError::Version {
                    found: v,
                    expected: SCHEMA_VERSION,
                })
            }
            None => {
                return Err(SchemaError::Shape(serde::de::Error::custom(
                    "schemaVersion must be an integer",
                )))
            }
        }
    }

    let dataset: Dataset = serde_json::from_value(raw).map_err(SchemaError::Shape)?;

    let mut checker = ConstraintChecker::default();
    checker.check_dataset(&dataset);

    if checker.errors.is_empty() {
        Ok(dataset)
    } else {
        Err(SchemaError::Constraints(checker.errors))
    }
}

// ============================================================================
// CONSTRAINT CHECKER
// ============================================================================

#[derive(Default)]
struct ConstraintChecker {
    errors: Vec<FieldError>,
}

impl ConstraintChecker {
    fn fail(&mut self, path: String, message: &str) {
        self.errors.push(FieldError {
            path,
            message: message.to_string(),
        });
    }

    fn check_uuid(&mut self, path: String, id: &str, seen: &mut HashSet<String>) {
        if Uuid::parse_str(id).is_err() {
            self.fail(path, "not a valid UUID");
        } else if !seen.insert(id.to_string()) {
            self.fail(path, "duplicate id within its collection");
        }
    }

    fn check_url(&mut self, path: String, value: &str) {
        if Url::parse(value).is_err() {
            self.fail(path, "not a valid absolute URL");
        }
    }

    fn check_country_codes(&mut self, path: &str, codes: &[String]) {
        for (i, code) in codes.iter().enumerate() {
            if code.chars().count() != 2 {
                self.fail(
                    format!("{path}[{i}]"),
                    "country code must be exactly 2 characters",
                );
            }
        }
    }

    fn check_dataset(&mut self, dataset: &Dataset) {
        let mut brand_ids = HashSet::new();
        let mut bank_ids = HashSet::new();
        let mut app_ids = HashSet::new();
        let mut merchant_ids = HashSet::new();

        let resource = &dataset.banks.standalone_app_resource;
        self.check_url(
            "banks.standaloneAppResource.iconUrl".to_string(),
            &resource.icon_url,
        );
        self.check_url(
            "banks.standaloneAppResource.universalLink".to_string(),
            &resource.universal_link,
        );

        for (i, brand) in dataset.banks.brands.iter().enumerate() {
            self.check_bank_brand(i, brand, &mut brand_ids, &mut bank_ids, &mut app_ids);
        }
        for (i, merchant) in dataset.merchants.brands.iter().enumerate() {
            self.check_merchant(i, merchant, &mut merchant_ids);
        }
    }

    fn check_bank_brand(
        &mut self,
        i: usize,
        brand: &BankBrand,
        brand_ids: &mut HashSet<String>,
        bank_ids: &mut HashSet<String>,
        app_ids: &mut HashSet<String>,
    ) {
        let base = format!("banks.brands[{i}]");
        self.check_uuid(format!("{base}.id"), &brand.id, brand_ids);
        self.check_url(format!("{base}.logoUrl"), &brand.logo_url);
        if brand.countries.is_empty() {
            self.fail(format!("{base}.countries"), "must not be empty");
        }
        self.check_country_codes(&format!("{base}.countries"), &brand.countries);

        for (j, bank) in brand.banks.iter().enumerate() {
            self.check_bank(&format!("{base}.banks[{j}]"), bank, bank_ids);
        }
        for (j, app) in brand.apps.iter().enumerate() {
            self.check_app(&format!("{base}.apps[{j}]"), app, app_ids);
        }
    }

    fn check_bank(&mut self, base: &str, bank: &Bank, bank_ids: &mut HashSet<String>) {
        self.check_uuid(format!("{base}.id"), &bank.id, bank_ids);
        self.check_url(format!("{base}.website"), &bank.website);
        if let Some(logo_url) = &bank.logo_url {
            self.check_url(format!("{base}.logoUrl"), logo_url);
        }
        if let Some(countries) = &bank.countries {
            self.check_country_codes(&format!("{base}.countries"), countries);
        }
    }

    fn check_app(&mut self, base: &str, app: &BankingApp, app_ids: &mut HashSet<String>) {
        self.check_uuid(format!("{base}.id"), &app.id, app_ids);
        self.check_url(format!("{base}.iconUrl"), &app.icon_url);
        self.check_url(format!("{base}.universalLink"), &app.universal_link);
    }

    fn check_merchant(
        &mut self,
        i: usize,
        merchant: &MerchantBrand,
        merchant_ids: &mut HashSet<String>,
    ) {
        let base = format!("merchants.brands[{i}]");
        self.check_uuid(format!("{base}.id"), &merchant.id, merchant_ids);
        self.check_url(format!("{base}.website"), &merchant.website);
        self.check_url(format!("{base}.logoUrl"), &merchant.logo_url);
        if merchant.countries.is_empty() {
            self.fail(format!("{base}.countries"), "must not be empty");
        }
        self.check_country_codes(&format!("{base}.countries"), &merchant.countries);
    }
}

// ============================================================================
// TESTS
// ============================================================================
