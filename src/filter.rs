// 🔍 Filter Engine - Multi-criteria brand filtering
//
// Three independent dimensions, ANDed together:
//   - text query: case-insensitive substring over brand name + aliases
//   - status set: membership of the brand-level weroSupport
//   - country set: non-empty intersection with the brand's countries
//
// An empty dimension passes everything. Filtering is pure, never mutates
// the input, and preserves input order (the output is a subsequence).

use std::collections::BTreeSet;

use crate::model::{BankBrand, MerchantBrand, SupportStatus};

// ============================================================================
// CRITERIA
// ============================================================================

/// User-controlled filter state. `Default` is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub statuses: BTreeSet<SupportStatus>,
    pub countries: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_status(mut self, status: SupportStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.insert(country.to_string());
        self
    }

    /// The query with surrounding whitespace stripped and case folded.
    /// An all-whitespace query filters nothing.
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_none() && self.statuses.is_empty() && self.countries.is_empty()
    }

    fn passes_status(&self, status: SupportStatus) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&status)
    }

    fn passes_countries(&self, countries: &[String]) -> bool {
        self.countries.is_empty() || countries.iter().any(|c| self.countries.contains(c))
    }
}

// ============================================================================
// FILTERING
// ============================================================================

/// Filter bank brands against the criteria. Matching is brand-level only;
/// individual bank and app statuses are not consulted.
pub fn filter_banks<'a>(brands: &'a [BankBrand], criteria: &FilterCriteria) -> Vec<&'a BankBrand> {
    let query = criteria.normalized_query();
    brands
        .iter()
        .filter(|brand| {
            if let Some(q) = &query {
                if !brand.matches_query(q) {
                    return false;
                }
            }
            criteria.passes_status(brand.wero_support) && criteria.passes_countries(&brand.countries)
        })
        .collect()
}

/// Filter merchant brands against the criteria.
pub fn filter_merchants<'a>(
    merchants: &'a [MerchantBrand],
    criteria: &FilterCriteria,
) -> Vec<&'a MerchantBrand> {
    let query = criteria.normalized_query();
    merchants
        .iter()
        .filter(|merchant| {
            if let Some(q) = &query {
                if !merchant.matches_query(q) {
                    return false;
                }
            }
            criteria.passes_status(merchant.wero_support)
                && criteria.passes_countries(&merchant.countries)
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_fixtures::{sample_bank_brand, sample_merchant};
    use crate::model::MerchantCategory;

    #[test]
    fn test_empty_criteria_is_identity() {
        let brands = vec![
            sample_bank_brand("Alpha", SupportStatus::Supported, &["DE"]),
            sample_bank_brand("Beta", SupportStatus::Unknown, &["FR"]),
        ];

        let filtered = filter_banks(&brands, &FilterCriteria::new());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0], &brands[0]);
        assert_eq!(filtered[1], &brands[1]);
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let brands = vec![sample_bank_brand(
            "ExampleBank",
            SupportStatus::Supported,
            &["DE"],
        )];

        let hit = filter_banks(&brands, &FilterCriteria::new().with_query("example"));
        assert_eq!(hit.len(), 1);

        let miss = filter_banks(&brands, &FilterCriteria::new().with_query("XYZ"));
        assert!(miss.is_empty());
    }

    #[test]
    fn test_query_matches_aliases() {
        let mut brand = sample_bank_brand("Cajamar", SupportStatus::Announced, &["ES"]);
        brand.aliases = vec!["Grupo Cooperativo Cajamar".to_string()];
        let brands = vec![brand];

        let filtered = filter_banks(&brands, &FilterCriteria::new().with_query("grupo"));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_whitespace_only_query_filters_nothing() {
        let brands = vec![sample_bank_brand("Alpha", SupportStatus::Supported, &["DE"])];

        let criteria = FilterCriteria::new().with_query("   ");
        assert!(criteria.is_empty());
        assert_eq!(filter_banks(&brands, &criteria).len(), 1);
    }

    #[test]
    fn test_status_filter_multi_select_or() {
        let brands = vec![
            sample_bank_brand("A", SupportStatus::Supported, &["DE"]),
            sample_bank_brand("B", SupportStatus::Announced, &["DE"]),
            sample_bank_brand("C", SupportStatus::Unknown, &["DE"]),
        ];

        let criteria = FilterCriteria::new()
            .with_status(SupportStatus::Supported)
            .with_status(SupportStatus::Announced);
        let filtered = filter_banks(&brands, &criteria);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "A");
        assert_eq!(filtered[1].name, "B");
    }

    #[test]
    fn test_country_filter_intersects_not_subsets() {
        // Brand spans DE+FR; selecting only FR must still match it
        let brands = vec![
            sample_bank_brand("A", SupportStatus::Supported, &["DE", "FR"]),
            sample_bank_brand("B", SupportStatus::Supported, &["BE"]),
        ];

        let filtered = filter_banks(&brands, &FilterCriteria::new().with_country("FR"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "A");
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let brands = vec![
            sample_bank_brand("Alpha", SupportStatus::Supported, &["DE"]),
            sample_bank_brand("Alphorn", SupportStatus::Announced, &["DE"]),
        ];

        let criteria = FilterCriteria::new()
            .with_query("alph")
            .with_status(SupportStatus::Supported);
        let filtered = filter_banks(&brands, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alpha");
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let brands = vec![
            sample_bank_brand("C", SupportStatus::Supported, &["DE"]),
            sample_bank_brand("A", SupportStatus::Unknown, &["DE"]),
            sample_bank_brand("B", SupportStatus::Supported, &["DE"]),
        ];

        let criteria = FilterCriteria::new().with_status(SupportStatus::Supported);
        let filtered = filter_banks(&brands, &criteria);

        // Relative input order preserved, no re-sorting
        assert_eq!(filtered[0].name, "C");
        assert_eq!(filtered[1].name, "B");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let filtered = filter_banks(&[], &FilterCriteria::new().with_query("x"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_merchants_analogous() {
        let merchants = vec![
            sample_merchant(
                "Zalando",
                MerchantCategory::Fashion,
                SupportStatus::Announced,
                &["DE"],
            ),
            sample_merchant(
                "MediaMarkt",
                MerchantCategory::Electronics,
                SupportStatus::Supported,
                &["DE", "NL"],
            ),
        ];

        let filtered = filter_merchants(
            &merchants,
            &FilterCriteria::new()
                .with_status(SupportStatus::Supported)
                .with_country("NL"),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "MediaMarkt");
    }
}
