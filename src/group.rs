// 🗂️ Grouping - Country sections and category sections
//
// Banks fan out: a brand spanning DE+FR appears in both buckets (same
// brand, multiple sections). Merchants do not: category is single-valued.
//
// Display order: country sections alphabetical, except a caller-supplied
// preferred country (derived from the user's locale) always sorts first.
// Category sections use the enum's canonical order; categories absent from
// the data are omitted, never rendered empty.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{BankBrand, MerchantBrand, MerchantCategory};

// ============================================================================
// GROUPING
// ============================================================================

/// Group bank brands by country code. A brand is appended to the bucket of
/// every country it lists, restricted to `allowed` when a country filter is
/// active (`None` = no restriction).
pub fn group_banks_by_country<'a>(
    brands: &[&'a BankBrand],
    allowed: Option<&BTreeSet<String>>,
) -> BTreeMap<String, Vec<&'a BankBrand>> {
    let mut by_country: BTreeMap<String, Vec<&BankBrand>> = BTreeMap::new();

    for &brand in brands {
        for code in &brand.countries {
            if let Some(allowed) = allowed {
                if !allowed.contains(code) {
                    continue;
                }
            }
            by_country.entry(code.clone()).or_default().push(brand);
        }
    }

    by_country
}

/// Group merchant brands by category. Each merchant lands in exactly one
/// bucket; the BTreeMap iterates in canonical category order.
pub fn group_merchants_by_category<'a>(
    merchants: &[&'a MerchantBrand],
) -> BTreeMap<MerchantCategory, Vec<&'a MerchantBrand>> {
    let mut by_category: BTreeMap<MerchantCategory, Vec<&MerchantBrand>> = BTreeMap::new();

    for &merchant in merchants {
        by_category.entry(merchant.category).or_default().push(merchant);
    }

    by_category
}

// ============================================================================
// SECTION ORDER
// ============================================================================

/// Flatten the country map into display order: the preferred country first
/// (when present in the data), the rest alphabetical.
pub fn country_sections<'a>(
    by_country: BTreeMap<String, Vec<&'a BankBrand>>,
    preferred: Option<&str>,
) -> Vec<(String, Vec<&'a BankBrand>)> {
    let mut sections: Vec<(String, Vec<&BankBrand>)> = by_country.into_iter().collect();

    // BTreeMap already yields alphabetical order; only the preferred
    // country needs hoisting.
    if let Some(preferred) = preferred {
        if let Some(pos) = sections.iter().position(|(code, _)| code == preferred) {
            let section = sections.remove(pos);
            sections.insert(0, section);
        }
    }

    sections
}

// ============================================================================
// TESTS
// ============================================================================
