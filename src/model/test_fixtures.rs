// Shared sample entities for the test modules. Each helper returns a fully
// valid entity with fresh UUIDs; tests override the fields they care about.

use uuid::Uuid;

use crate::model::bank::{Bank, BankBrand, BankingApp, BanksData, StandaloneAppResource};
use crate::model::dataset::Dataset;
use crate::model::merchant::{MerchantBrand, MerchantCategory, MerchantsData};
use crate::model::status::SupportStatus;

pub fn sample_banking_app(name: &str) -> BankingApp {
    BankingApp {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        icon_url: "https://cdn.example.org/app.png".to_string(),
        universal_link: "https://example.org/app".to_string(),
        supports_desktop: false,
        wero_support: SupportStatus::Supported,
    }
}

pub fn sample_bank(name: &str) -> Bank {
    Bank {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        website: "https://example.org".to_string(),
        bank_context: None,
        app_ids: Vec::new(),
        aliases: Vec::new(),
        countries: None,
        logo_url: None,
        standalone_app_support: SupportStatus::Supported,
        p2p_payments_support: SupportStatus::Supported,
        ecommerce_payments_support: SupportStatus::Announced,
        pos_payments_support: SupportStatus::Unknown,
    }
}

pub fn sample_bank_brand(name: &str, status: SupportStatus, countries: &[&str]) -> BankBrand {
    BankBrand {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        aliases: Vec::new(),
        wero_support: status,
        countries: countries.iter().map(|c| c.to_string()).collect(),
        logo_url: "https://cdn.example.org/logo.svg".to_string(),
        banks: vec![sample_bank(&format!("{name} Bank"))],
        apps: Vec::new(),
        notes: None,
    }
}

pub fn sample_merchant(
    name: &str,
    category: MerchantCategory,
    status: SupportStatus,
    countries: &[&str],
) -> MerchantBrand {
    MerchantBrand {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        aliases: Vec::new(),
        website: "https://shop.example.org".to_string(),
        logo_url: "https://cdn.example.org/shop.svg".to_string(),
        category,
        countries: countries.iter().map(|c| c.to_string()).collect(),
        wero_support: status,
        notes: None,
    }
}

pub fn sample_standalone_app() -> StandaloneAppResource {
    StandaloneAppResource {
        name: "Wero".to_string(),
        icon_url: "https://cdn.example.org/wero.png".to_string(),
        universal_link: "https://wero.example.org/get".to_string(),
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        schema_version: None,
        banks: BanksData {
            brands: Vec::new(),
            standalone_app_resource: sample_standalone_app(),
        },
        merchants: MerchantsData { brands: Vec::new() },
    }
}
