// 🛍️ Merchant Entities - Online shops accepting Wero
//
// A MerchantBrand is flat (no sub-entities); it belongs to exactly one
// category. The category enum's declared order IS the canonical display
// order, so a BTreeMap keyed by it iterates the way the UI renders.

use serde::{Deserialize, Serialize};

use crate::model::status::SupportStatus;

// ============================================================================
// MERCHANT CATEGORY
// ============================================================================

/// Closed merchant category set, declared in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MerchantCategory {
    Fashion,
    Electronics,
    FoodDelivery,
    Groceries,
    Travel,
    Entertainment,
    Services,
    Other,
}

impl MerchantCategory {
    /// Canonical display order (matches declaration order)
    pub const ALL: [MerchantCategory; 8] = [
        MerchantCategory::Fashion,
        MerchantCategory::Electronics,
        MerchantCategory::FoodDelivery,
        MerchantCategory::Groceries,
        MerchantCategory::Travel,
        MerchantCategory::Entertainment,
        MerchantCategory::Services,
        MerchantCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantCategory::Fashion => "fashion",
            MerchantCategory::Electronics => "electronics",
            MerchantCategory::FoodDelivery => "food-delivery",
            MerchantCategory::Groceries => "groceries",
            MerchantCategory::Travel => "travel",
            MerchantCategory::Entertainment => "entertainment",
            MerchantCategory::Services => "services",
            MerchantCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MerchantCategory::Fashion => "Fashion & Apparel",
            MerchantCategory::Electronics => "Electronics",
            MerchantCategory::FoodDelivery => "Food Delivery",
            MerchantCategory::Groceries => "Groceries",
            MerchantCategory::Travel => "Travel & Booking",
            MerchantCategory::Entertainment => "Entertainment",
            MerchantCategory::Services => "Services",
            MerchantCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for MerchantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MERCHANT BRAND
// ============================================================================

/// An online shop tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MerchantBrand {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub website: String,
    pub logo_url: String,
    pub category: MerchantCategory,
    pub countries: Vec<String>,
    pub wero_support: SupportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MerchantBrand {
    /// Case-insensitive substring match on the merchant name or any alias.
    /// `query` is expected to be lowercased already.
    pub fn matches_query(&self, query: &str) -> bool {
        if self.name.to_lowercase().contains(query) {
            return true;
        }
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(query))
    }
}

/// The `merchants` half of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MerchantsData {
    pub brands: Vec<MerchantBrand>,
}

// ============================================================================
// TESTS
// ============================================================================
