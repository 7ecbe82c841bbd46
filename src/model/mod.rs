// Data Model - Typed view of one published dataset snapshot
//
// Each entity has:
// - Stable identity (UUID string) that never changes across snapshots
// - Values the next published snapshot may replace
// - Wire names matching the published JSON exactly (camelCase, with a few
//   irregular legacy names on Bank)

pub mod bank;
pub mod dataset;
pub mod merchant;
pub mod status;

pub use bank::{Bank, BankBrand, BankFeature, BankingApp, BanksData, StandaloneAppResource};
pub use dataset::{Dataset, TrackerView, EU_COUNTRIES, SCHEMA_VERSION};
pub use merchant::{MerchantBrand, MerchantCategory, MerchantsData};
pub use status::{FeatureSupport, SourceLink, SupportStatus};

#[cfg(test)]
pub(crate) mod test_fixtures;
