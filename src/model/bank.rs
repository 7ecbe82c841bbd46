// 🏦 Bank Entities - Brands, legal banks, and their apps
//
// A BankBrand is the unit of display: one marketing brand owning one or more
// legal Bank entities plus the banking apps those banks ship. Banks reference
// apps by id (`app_ids`); the apps live on the owning brand.
//
// Identity is the UUID string (never changes); everything else is a value
// that the next published dataset snapshot may replace.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::status::{FeatureSupport, SupportStatus};

/// The four per-bank feature columns the bank card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFeature {
    StandaloneApp,
    P2pPayments,
    ECommercePayments,
    PosPayments,
}

impl BankFeature {
    pub const ALL: [BankFeature; 4] = [
        BankFeature::StandaloneApp,
        BankFeature::P2pPayments,
        BankFeature::ECommercePayments,
        BankFeature::PosPayments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BankFeature::StandaloneApp => "Wero App",
            BankFeature::P2pPayments => "P2P Payments",
            BankFeature::ECommercePayments => "Online Payments",
            BankFeature::PosPayments => "In-Store Payments",
        }
    }
}

// ============================================================================
// BANKING APP
// ============================================================================

/// A mobile banking app owned by a brand and referenced by its banks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankingApp {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub universal_link: String,
    pub supports_desktop: bool,
    pub wero_support: SupportStatus,
}

// ============================================================================
// BANK
// ============================================================================

/// One legally distinct banking entity under a brand (may correspond to a
/// specific BIC, carried in `bank_context`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Bank {
    pub id: String,
    pub name: String,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_context: Option<String>,
    /// References into the owning brand's `apps`; duplicates tolerated,
    /// dangling ids resolved leniently at render time
    pub app_ids: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Defaults to the brand's countries when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    /// Falls back to the brand's logo when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub standalone_app_support: SupportStatus,
    #[serde(rename = "P2PPaymentsSupport")]
    pub p2p_payments_support: SupportStatus,
    #[serde(rename = "eCommercePaymentsSupport")]
    pub ecommerce_payments_support: SupportStatus,
    #[serde(rename = "POSPaymentsSupport")]
    pub pos_payments_support: SupportStatus,
}

impl Bank {
    /// Countries this bank operates in, defaulting to the owning brand's
    pub fn countries_or<'a>(&'a self, brand: &'a BankBrand) -> &'a [String] {
        match &self.countries {
            Some(countries) => countries,
            None => &brand.countries,
        }
    }

    /// Logo for display, falling back to the owning brand's
    pub fn logo_url_or<'a>(&'a self, brand: &'a BankBrand) -> &'a str {
        self.logo_url.as_deref().unwrap_or(&brand.logo_url)
    }

    pub fn feature_status(&self, feature: BankFeature) -> SupportStatus {
        match feature {
            BankFeature::StandaloneApp => self.standalone_app_support,
            BankFeature::P2pPayments => self.p2p_payments_support,
            BankFeature::ECommercePayments => self.ecommerce_payments_support,
            BankFeature::PosPayments => self.pos_payments_support,
        }
    }

    /// Status cell for one feature column. Evidence and notes live on the
    /// contribution side today, so the cell starts bare.
    pub fn feature_support(&self, feature: BankFeature) -> FeatureSupport {
        FeatureSupport::new(self.feature_status(feature))
    }
}

// ============================================================================
// BANK BRAND
// ============================================================================

/// A bank holding company / marketing brand. Top-level display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankBrand {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    /// Brand-level default/summary status
    pub wero_support: SupportStatus,
    pub countries: Vec<String>,
    pub logo_url: String,
    pub banks: Vec<Bank>,
    pub apps: Vec<BankingApp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BankBrand {
    /// Case-insensitive substring match on the brand name or any alias.
    /// `query` is expected to be lowercased already.
    pub fn matches_query(&self, query: &str) -> bool {
        if self.name.to_lowercase().contains(query) {
            return true;
        }
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(query))
    }

    /// All names (canonical + aliases)
    pub fn all_names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        names.extend(self.aliases.iter().map(|a| a.as_str()));
        names
    }

    /// Look up an owned app by id
    pub fn app(&self, app_id: &str) -> Option<&BankingApp> {
        self.apps.iter().find(|app| app.id == app_id)
    }

    /// Resolve a bank's `app_ids` against this brand's apps. Dangling
    /// references are skipped with a warning, never an error; all valid
    /// references are still resolved.
    pub fn resolved_apps<'a>(&'a self, bank: &Bank) -> Vec<&'a BankingApp> {
        bank.app_ids
            .iter()
            .filter_map(|app_id| {
                let app = self.app(app_id);
                if app.is_none() {
                    warn!(
                        brand = %self.name,
                        bank = %bank.name,
                        app_id = %app_id,
                        "bank references unknown app id"
                    );
                }
                app
            })
            .collect()
    }

    /// Dangling app references across all banks of this brand, as
    /// `(bank name, app id)` pairs. Used by the lint pass.
    pub fn dangling_app_refs(&self) -> Vec<(&str, &str)> {
        self.banks
            .iter()
            .flat_map(|bank| {
                bank.app_ids
                    .iter()
                    .filter(|app_id| self.app(app_id).is_none())
                    .map(move |app_id| (bank.name.as_str(), app_id.as_str()))
            })
            .collect()
    }
}

// ============================================================================
// STANDALONE APP
// ============================================================================

/// The one global Wero app descriptor, not owned by any brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StandaloneAppResource {
    pub name: String,
    pub icon_url: String,
    pub universal_link: String,
}

/// The `banks` half of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BanksData {
    pub brands: Vec<BankBrand>,
    pub standalone_app_resource: StandaloneAppResource,
}

// ============================================================================
// TESTS
// ============================================================================
