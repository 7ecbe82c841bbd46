// Wero Tracker Core - Library
//
// Dataset validation, filtering, grouping, and summary statistics behind
// the community Wero rollout dashboard. The flow is a straight pipeline:
//
//   raw JSON → schema::validate → Dataset → filter → group/stats → UI
//
// Everything here is pure and synchronous; fetching the dataset document
// and rendering are owned by the surrounding shell.

pub mod config;
pub mod contribution;
pub mod filter;
pub mod group;
pub mod locale;
pub mod model;
pub mod schema;
pub mod stats;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use contribution::{
    BankBrandDraft, BankDraft, BankingAppDraft, Contribution, ContributionAction,
    ContributionPayload, MerchantDraft, PayloadError,
};
pub use filter::{filter_banks, filter_merchants, FilterCriteria};
pub use group::{country_sections, group_banks_by_country, group_merchants_by_category};
pub use locale::derive_user_country;
pub use model::{
    Bank, BankBrand, BankFeature, BankingApp, BanksData, Dataset, FeatureSupport, MerchantBrand,
    MerchantCategory, MerchantsData, SourceLink, StandaloneAppResource, SupportStatus,
    TrackerView, EU_COUNTRIES, SCHEMA_VERSION,
};
pub use schema::{validate, FieldError, SchemaError};
pub use stats::{
    compute_bank_stats, compute_merchant_stats, top_supported_countries, BankStats, MerchantStats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
