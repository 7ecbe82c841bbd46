// 📦 Dataset - Top-level container for one published snapshot
//
// Loaded once per session from the remote JSON document; immutable after
// validation. User edits never mutate it, they become Contributions.

use serde::{Deserialize, Serialize};

use crate::model::bank::BanksData;
use crate::model::merchant::MerchantsData;

/// Current dataset generation. Snapshots without a `schemaVersion` tag
/// predate the tag and are treated as current; any other value is rejected
/// by the validator.
pub const SCHEMA_VERSION: u32 = 2;

/// The 27 EU member country codes used as the denominator for the
/// country-coverage stat.
pub const EU_COUNTRIES: [&str; 27] = [
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT",
    "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
];

/// One published snapshot of the tracker data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    pub banks: BanksData,
    pub merchants: MerchantsData,
}

impl Dataset {
    /// Distinct country codes present across the given view, sorted. Drives
    /// the country multi-select options.
    pub fn available_countries(&self, view: TrackerView) -> Vec<String> {
        let mut countries: Vec<String> = match view {
            TrackerView::Banks => self
                .banks
                .brands
                .iter()
                .flat_map(|brand| brand.countries.iter().cloned())
                .collect(),
            TrackerView::Merchants => self
                .merchants
                .brands
                .iter()
                .flat_map(|brand| brand.countries.iter().cloned())
                .collect(),
        };
        countries.sort();
        countries.dedup();
        countries
    }
}

/// Which half of the dataset the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerView {
    Banks,
    Merchants,
}

// ============================================================================
// TESTS
// ============================================================================
