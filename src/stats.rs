// 📊 Summary Statistics - The stats-overview numbers
//
// Buckets: supported, announced, and "unsupported" = everything else
// (total − supported − announced), which deliberately folds `unknown` in.
// The full per-status breakdown stays available in `status_counts` for
// callers that want the finer split.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{BankBrand, MerchantBrand, SupportStatus, EU_COUNTRIES};

// ============================================================================
// BANK STATS
// ============================================================================

/// Summary numbers over a (possibly filtered) set of bank brands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStats {
    /// Distinct countries with at least one supported brand
    pub supported_countries: BTreeSet<String>,
    /// Countries with an announced brand but no supported one
    pub additionally_announced_countries: BTreeSet<String>,
    /// Denominator for country coverage (the 27 EU members)
    pub eu_member_countries: usize,
    pub total_brands: usize,
    pub supported_brands: usize,
    pub announced_brands: usize,
    /// total − supported − announced; absorbs `unsupported` and `unknown`
    pub unsupported_brands: usize,
    /// Rounded to the nearest integer, 0 when there are no brands
    pub percent_supported: u32,
    /// Exact per-status counts, for callers wanting the 4-way split
    pub status_counts: BTreeMap<SupportStatus, usize>,
}

impl BankStats {
    pub fn summary(&self) -> String {
        format!(
            "{} of {} countries, {} supported / {} announced / {} unsupported brands ({}% supported)",
            self.supported_countries.len(),
            self.eu_member_countries,
            self.supported_brands,
            self.announced_brands,
            self.unsupported_brands,
            self.percent_supported,
        )
    }
}

/// Compute bank summary stats. Pure; safe on an empty slice.
pub fn compute_bank_stats(brands: &[&BankBrand]) -> BankStats {
    let mut supported_countries = BTreeSet::new();
    let mut announced_countries = BTreeSet::new();
    let mut status_counts: BTreeMap<SupportStatus, usize> = BTreeMap::new();

    for brand in brands {
        *status_counts.entry(brand.wero_support).or_default() += 1;
        match brand.wero_support {
            SupportStatus::Supported => {
                supported_countries.extend(brand.countries.iter().cloned());
            }
            SupportStatus::Announced => {
                announced_countries.extend(brand.countries.iter().cloned());
            }
            _ => {}
        }
    }

    let additionally_announced_countries = announced_countries
        .difference(&supported_countries)
        .cloned()
        .collect();

    let total_brands = brands.len();
    let supported_brands = status_counts
        .get(&SupportStatus::Supported)
        .copied()
        .unwrap_or(0);
    let announced_brands = status_counts
        .get(&SupportStatus::Announced)
        .copied()
        .unwrap_or(0);

    BankStats {
        supported_countries,
        additionally_announced_countries,
        eu_member_countries: EU_COUNTRIES.len(),
        total_brands,
        supported_brands,
        announced_brands,
        unsupported_brands: total_brands - supported_brands - announced_brands,
        percent_supported: percent(supported_brands, total_brands),
        status_counts,
    }
}

/// Countries ranked by number of supported brands, best first; ties broken
/// alphabetically. At most `n` entries.
pub fn top_supported_countries(brands: &[&BankBrand], n: usize) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for brand in brands {
        if brand.wero_support == SupportStatus::Supported {
            for code in &brand.countries {
                *counts.entry(code.clone()).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // BTreeMap gives alphabetical order; a stable sort by count keeps the
    // alphabetical tiebreak.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

// ============================================================================
// MERCHANT STATS
// ============================================================================

/// Summary numbers over a (possibly filtered) set of merchant brands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantStats {
    /// Flat count of online shops tracked
    pub total_shops: usize,
    pub supported_shops: usize,
    pub announced_shops: usize,
    /// total − supported − announced; absorbs `unsupported` and `unknown`
    pub unsupported_shops: usize,
    /// Rounded to the nearest integer, 0 when there are no shops
    pub percent_supported: u32,
    pub status_counts: BTreeMap<SupportStatus, usize>,
}

impl MerchantStats {
    pub fn summary(&self) -> String {
        format!(
            "{} shops tracked, {} supported / {} announced / {} unsupported ({}% supported)",
            self.total_shops,
            self.supported_shops,
            self.announced_shops,
            self.unsupported_shops,
            self.percent_supported,
        )
    }
}

/// Compute merchant summary stats. Pure; safe on an empty slice.
pub fn compute_merchant_stats(merchants: &[&MerchantBrand]) -> MerchantStats {
    let mut status_counts: BTreeMap<SupportStatus, usize> = BTreeMap::new();
    for merchant in merchants {
        *status_counts.entry(merchant.wero_support).or_default() += 1;
    }

    let total_shops = merchants.len();
    let supported_shops = status_counts
        .get(&SupportStatus::Supported)
        .copied()
        .unwrap_or(0);
    let announced_shops = status_counts
        .get(&SupportStatus::Announced)
        .copied()
        .unwrap_or(0);

    MerchantStats {
        total_shops,
        supported_shops,
        announced_shops,
        unsupported_shops: total_shops - supported_shops - announced_shops,
        percent_supported: percent(supported_shops, total_shops),
        status_counts,
    }
}

/// round(part / total * 100), guarded against an empty total.
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
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
    fn test_bank_stats_bucket_breakdown() {
        let brands = vec![
            sample_bank_brand("A", SupportStatus::Supported, &["DE"]),
            sample_bank_brand("B", SupportStatus::Supported, &["FR"]),
            sample_bank_brand("C", SupportStatus::Announced, &["BE"]),
            sample_bank_brand("D", SupportStatus::Unknown, &["NL"]),
        ];
        let refs: Vec<&BankBrand> = brands.iter().collect();

        let stats = compute_bank_stats(&refs);
        assert_eq!(stats.total_brands, 4);
        assert_eq!(stats.supported_brands, 2);
        assert_eq!(stats.announced_brands, 1);
        // Unknown folds into the unsupported bucket
        assert_eq!(stats.unsupported_brands, 1);
        assert_eq!(stats.percent_supported, 50);
        // But the exact split is still recoverable
        assert_eq!(stats.status_counts[&SupportStatus::Unknown], 1);
    }

    #[test]
    fn test_empty_input_never_divides_by_zero() {
        let stats = compute_bank_stats(&[]);
        assert_eq!(stats.total_brands, 0);
        assert_eq!(stats.percent_supported, 0);
        assert!(stats.supported_countries.is_empty());

        let merchant_stats = compute_merchant_stats(&[]);
        assert_eq!(merchant_stats.percent_supported, 0);
    }

    #[test]
    fn test_announced_countries_exclude_supported_ones() {
        let brands = vec![
            sample_bank_brand("A", SupportStatus::Supported, &["DE", "FR"]),
            sample_bank_brand("B", SupportStatus::Announced, &["FR", "IT"]),
        ];
        let refs: Vec<&BankBrand> = brands.iter().collect();

        let stats = compute_bank_stats(&refs);
        assert_eq!(
            stats.supported_countries,
            BTreeSet::from(["DE".to_string(), "FR".to_string()])
        );
        // FR already supported, so only IT counts as additionally announced
        assert_eq!(
            stats.additionally_announced_countries,
            BTreeSet::from(["IT".to_string()])
        );
        assert_eq!(stats.eu_member_countries, 27);
    }

    #[test]
    fn test_percent_rounds_to_nearest_integer() {
        let brands = vec![
            sample_bank_brand("A", SupportStatus::Supported, &["DE"]),
            sample_bank_brand("B", SupportStatus::Unknown, &["DE"]),
            sample_bank_brand("C", SupportStatus::Unknown, &["DE"]),
        ];
        let refs: Vec<&BankBrand> = brands.iter().collect();

        // 1/3 = 33.33 → 33
        assert_eq!(compute_bank_stats(&refs).percent_supported, 33);
    }

    #[test]
    fn test_top_supported_countries_ranked_with_tiebreak() {
        let brands = vec![
            sample_bank_brand("A", SupportStatus::Supported, &["DE", "FR"]),
            sample_bank_brand("B", SupportStatus::Supported, &["FR"]),
            sample_bank_brand("C", SupportStatus::Supported, &["BE"]),
            sample_bank_brand("D", SupportStatus::Announced, &["IT"]),
        ];
        let refs: Vec<&BankBrand> = brands.iter().collect();

        let top = top_supported_countries(&refs, 2);
        // FR has 2 supported brands; BE and DE tie at 1, BE wins alphabetically
        assert_eq!(top, [("FR".to_string(), 2), ("BE".to_string(), 1)]);
    }

    #[test]
    fn test_merchant_stats() {
        let merchants = vec![
            sample_merchant("A", MerchantCategory::Fashion, SupportStatus::Supported, &["DE"]),
            sample_merchant("B", MerchantCategory::Other, SupportStatus::Announced, &["FR"]),
            sample_merchant("C", MerchantCategory::Travel, SupportStatus::Unsupported, &["BE"]),
        ];
        let refs: Vec<&MerchantBrand> = merchants.iter().collect();

        let stats = compute_merchant_stats(&refs);
        assert_eq!(stats.total_shops, 3);
        assert_eq!(stats.supported_shops, 1);
        assert_eq!(stats.announced_shops, 1);
        assert_eq!(stats.unsupported_shops, 1);
        assert_eq!(stats.percent_supported, 33);
    }
}
