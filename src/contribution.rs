// ✍️ Contributions - Crowd-sourced correction requests
//
// A Contribution never mutates the loaded dataset. It is validated locally,
// serialized into a pre-filled issue on the project's issue tracker, and a
// human reviewer lands it in the next published snapshot.
//
// The issue body carries the payload twice: pretty-printed JSON for the
// reviewer and a base64 marker comment for machine re-extraction.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::model::{Bank, BankBrand, BankingApp, MerchantBrand, MerchantCategory, SourceLink, SupportStatus};

// ============================================================================
// ACTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionAction {
    Add,
    Edit,
    Delete,
}

impl ContributionAction {
    /// Verb used in issue titles
    pub fn label(&self) -> &'static str {
        match self {
            ContributionAction::Add => "Add",
            ContributionAction::Edit => "Update",
            ContributionAction::Delete => "Remove",
        }
    }

    pub fn requires_reason(&self) -> bool {
        matches!(self, ContributionAction::Edit | ContributionAction::Delete)
    }
}

// ============================================================================
// DRAFT PAYLOADS
// ============================================================================
// Entity-shaped payloads with optional ids: a new entity has no id yet, an
// edit/delete carries the existing one. Strongly shaped per contribution
// type so bank fields can never leak into a merchant payload.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankingAppDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub icon_url: String,
    pub universal_link: String,
    pub supports_desktop: bool,
    pub wero_support: SupportStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_context: Option<String>,
    #[serde(default)]
    pub app_ids: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankBrandDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub wero_support: SupportStatus,
    pub countries: Vec<String>,
    pub logo_url: String,
    pub banks: Vec<BankDraft>,
    #[serde(default)]
    pub apps: Vec<BankingAppDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MerchantDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub website: String,
    pub logo_url: String,
    pub category: MerchantCategory,
    pub countries: Vec<String>,
    pub wero_support: SupportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&BankingApp> for BankingAppDraft {
    fn from(app: &BankingApp) -> Self {
        BankingAppDraft {
            id: Some(app.id.clone()),
            name: app.name.clone(),
            icon_url: app.icon_url.clone(),
            universal_link: app.universal_link.clone(),
            supports_desktop: app.supports_desktop,
            wero_support: app.wero_support,
        }
    }
}

impl From<&Bank> for BankDraft {
    fn from(bank: &Bank) -> Self {
        BankDraft {
            id: Some(bank.id.clone()),
            name: bank.name.clone(),
            website: bank.website.clone(),
            bank_context: bank.bank_context.clone(),
            app_ids: bank.app_ids.clone(),
            aliases: bank.aliases.clone(),
            countries: bank.countries.clone(),
            logo_url: bank.logo_url.clone(),
            standalone_app_support: bank.standalone_app_support,
            p2p_payments_support: bank.p2p_payments_support,
            ecommerce_payments_support: bank.ecommerce_payments_support,
            pos_payments_support: bank.pos_payments_support,
        }
    }
}

impl From<&BankBrand> for BankBrandDraft {
    fn from(brand: &BankBrand) -> Self {
        BankBrandDraft {
            id: Some(brand.id.clone()),
            name: brand.name.clone(),
            aliases: brand.aliases.clone(),
            wero_support: brand.wero_support,
            countries: brand.countries.clone(),
            logo_url: brand.logo_url.clone(),
            banks: brand.banks.iter().map(BankDraft::from).collect(),
            apps: brand.apps.iter().map(BankingAppDraft::from).collect(),
            notes: brand.notes.clone(),
        }
    }
}

impl From<&MerchantBrand> for MerchantDraft {
    fn from(merchant: &MerchantBrand) -> Self {
        MerchantDraft {
            id: Some(merchant.id.clone()),
            name: merchant.name.clone(),
            aliases: merchant.aliases.clone(),
            website: merchant.website.clone(),
            logo_url: merchant.logo_url.clone(),
            category: merchant.category,
            countries: merchant.countries.clone(),
            wero_support: merchant.wero_support,
            notes: merchant.notes.clone(),
        }
    }
}

// ============================================================================
// CONTRIBUTION
// ============================================================================

/// One user-proposed add/edit/delete, tagged by entity kind so a payload can
/// never mix bank and merchant fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Contribution {
    BankBrand {
        /// The contribution's own id, not the entity's
        id: String,
        action: ContributionAction,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        /// Evidence backing the proposed change
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sources: Vec<SourceLink>,
        data: BankBrandDraft,
    },
    Merchant {
        id: String,
        action: ContributionAction,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sources: Vec<SourceLink>,
        data: MerchantDraft,
    },
}

impl Contribution {
    pub fn bank_brand(
        action: ContributionAction,
        data: BankBrandDraft,
        reason: Option<String>,
    ) -> Self {
        Contribution::BankBrand {
            id: Uuid::new_v4().to_string(),
            action,
            reason,
            sources: Vec::new(),
            data,
        }
    }

    pub fn merchant(
        action: ContributionAction,
        data: MerchantDraft,
        reason: Option<String>,
    ) -> Self {
        Contribution::Merchant {
            id: Uuid::new_v4().to_string(),
            action,
            reason,
            sources: Vec::new(),
            data,
        }
    }

    pub fn action(&self) -> ContributionAction {
        match self {
            Contribution::BankBrand { action, .. } | Contribution::Merchant { action, .. } => {
                *action
            }
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Contribution::BankBrand { reason, .. } | Contribution::Merchant { reason, .. } => {
                reason.as_deref()
            }
        }
    }

    /// Name of the affected entity (for issue titles)
    pub fn entity_name(&self) -> &str {
        match self {
            Contribution::BankBrand { data, .. } => &data.name,
            Contribution::Merchant { data, .. } => &data.name,
        }
    }

    /// Wire value of the `type` tag
    pub fn type_tag(&self) -> &'static str {
        match self {
            Contribution::BankBrand { .. } => "bank-brand",
            Contribution::Merchant { .. } => "merchant",
        }
    }

    fn type_label(&self) -> &'static str {
        match self {
            Contribution::BankBrand { .. } => "Bank",
            Contribution::Merchant { .. } => "Merchant",
        }
    }

    fn data_json(&self) -> serde_json::Value {
        match self {
            Contribution::BankBrand { data, .. } => {
                serde_json::to_value(data).unwrap_or_default()
            }
            Contribution::Merchant { data, .. } => serde_json::to_value(data).unwrap_or_default(),
        }
    }

    /// Caller-side validation. Returns every missing field at once as
    /// human-readable messages; an Ok result means the contribution may be
    /// submitted.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();

        if self.action().requires_reason() && self.reason().map_or(true, |r| r.trim().is_empty()) {
            missing.push("a reason is required for edit and delete requests".to_string());
        }
        if self.entity_name().trim().is_empty() {
            missing.push("a name is required".to_string());
        }

        match self {
            Contribution::BankBrand { data, .. } => {
                if data.countries.is_empty() {
                    missing.push("at least one country is required".to_string());
                }
                if data.banks.is_empty() {
                    missing.push("at least one bank is required".to_string());
                }
            }
            Contribution::Merchant { data, .. } => {
                if data.countries.is_empty() {
                    missing.push("at least one country is required".to_string());
                }
                if data.website.trim().is_empty() {
                    missing.push("a website is required".to_string());
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

// ============================================================================
// SUBMISSION PAYLOAD
// ============================================================================

const MARKER_PREFIX: &str = "<!-- CONTRIBUTION_DATA:";
const MARKER_SUFFIX: &str = " -->";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("issue body carries no contribution data marker")]
    MissingMarker,
    #[error("contribution marker is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("contribution payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// What actually travels inside the issue body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionPayload {
    pub contribution: Contribution,
    pub timestamp: DateTime<Utc>,
}

impl ContributionPayload {
    pub fn new(contribution: Contribution) -> Self {
        ContributionPayload {
            contribution,
            timestamp: Utc::now(),
        }
    }

    /// Issue title, e.g. `[Contribution] Update Bank: Sparkasse`.
    pub fn issue_title(&self) -> String {
        format!(
            "[Contribution] {} {}: {}",
            self.contribution.action().label(),
            self.contribution.type_label(),
            self.contribution.entity_name(),
        )
    }

    /// Markdown issue body: human-readable summary, pretty-printed data,
    /// and the machine-readable marker trailer.
    pub fn issue_body(&self) -> String {
        let mut body = String::from("## Contribution Request\n\n");
        body.push_str(&format!("**Type:** {}\n", self.contribution.type_tag()));
        body.push_str(&format!(
            "**Action:** {}\n",
            self.contribution.action().label().to_lowercase()
        ));
        body.push_str(&format!(
            "**Submitted:** {}\n\n",
            self.timestamp.to_rfc3339()
        ));

        if let Some(reason) = self.contribution.reason() {
            body.push_str(&format!("### Reason\n{reason}\n\n"));
        }

        let data = serde_json::to_string_pretty(&self.contribution.data_json())
            .unwrap_or_else(|_| "{}".to_string());
        body.push_str("### Data\n\n```json\n");
        body.push_str(&data);
        body.push_str("\n```\n\n---\n");

        let encoded = BASE64.encode(serde_json::to_vec(self).unwrap_or_default());
        body.push_str(&format!("{MARKER_PREFIX}{encoded}{MARKER_SUFFIX}\n"));

        body
    }

    /// Pre-filled issue-creation URL on the configured tracker. The core
    /// builds the URL; opening it is the shell's job.
    pub fn issue_url(&self, config: &TrackerConfig) -> String {
        format!(
            "{}/issues/new?title={}&body={}&labels=contribution",
            config.source_repository,
            urlencoding::encode(&self.issue_title()),
            urlencoding::encode(&self.issue_body()),
        )
    }

    /// Re-extract a payload from an issue body's marker comment.
    pub fn from_issue_body(body: &str) -> Result<Self, PayloadError> {
        let start = body.find(MARKER_PREFIX).ok_or(PayloadError::MissingMarker)?;
        let rest = &body[start + MARKER_PREFIX.len()..];
        let end = rest.find(MARKER_SUFFIX).ok_or(PayloadError::MissingMarker)?;

        let bytes = BASE64.decode(&rest[..end])?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_fixtures::{sample_bank_brand, sample_merchant};

    fn sample_brand_draft() -> BankBrandDraft {
        let brand = sample_bank_brand("Sparkasse", SupportStatus::Supported, &["DE"]);
        BankBrandDraft::from(&brand)
    }

    fn sample_merchant_draft() -> MerchantDraft {
        let merchant = sample_merchant(
            "Zalando",
            MerchantCategory::Fashion,
            SupportStatus::Announced,
            &["DE"],
        );
        MerchantDraft::from(&merchant)
    }

    #[test]
    fn test_tagged_serialization() {
        let contribution = Contribution::bank_brand(
            ContributionAction::Add,
            sample_brand_draft(),
            None,
        );
        let json = serde_json::to_value(&contribution).unwrap();

        assert_eq!(json["type"], "bank-brand");
        assert_eq!(json["action"], "add");
        assert_eq!(json["data"]["name"], "Sparkasse");

        let merchant = Contribution::merchant(
            ContributionAction::Delete,
            sample_merchant_draft(),
            Some("closed down".to_string()),
        );
        let json = serde_json::to_value(&merchant).unwrap();
        assert_eq!(json["type"], "merchant");
        assert_eq!(json["reason"], "closed down");
    }

    #[test]
    fn test_add_does_not_require_reason() {
        let contribution =
            Contribution::bank_brand(ContributionAction::Add, sample_brand_draft(), None);
        assert!(contribution.validate().is_ok());
    }

    #[test]
    fn test_edit_without_reason_blocked() {
        let contribution =
            Contribution::bank_brand(ContributionAction::Edit, sample_brand_draft(), None);
        let errors = contribution.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("reason"));
    }

    #[test]
    fn test_validation_lists_every_missing_field() {
        let mut draft = sample_brand_draft();
        draft.countries.clear();
        draft.banks.clear();
        let contribution = Contribution::bank_brand(ContributionAction::Edit, draft, None);

        let errors = contribution.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("reason")));
        assert!(errors.iter().any(|e| e.contains("country")));
        assert!(errors.iter().any(|e| e.contains("bank")));
    }

    #[test]
    fn test_new_entity_draft_has_no_id() {
        let mut draft = sample_merchant_draft();
        draft.id = None;
        let json = serde_json::to_value(&draft).unwrap();
        // Absent, not null
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_issue_title() {
        let payload = ContributionPayload::new(Contribution::merchant(
            ContributionAction::Edit,
            sample_merchant_draft(),
            Some("new logo".to_string()),
        ));
        assert_eq!(payload.issue_title(), "[Contribution] Update Merchant: Zalando");
    }

    #[test]
    fn test_issue_body_round_trips_through_marker() {
        let payload = ContributionPayload::new(Contribution::bank_brand(
            ContributionAction::Edit,
            sample_brand_draft(),
            Some("status went live".to_string()),
        ));

        let body = payload.issue_body();
        assert!(body.contains("## Contribution Request"));
        assert!(body.contains("### Reason\nstatus went live"));
        assert!(body.contains("```json"));

        let decoded = ContributionPayload::from_issue_body(&body).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_body_without_marker_fails_decoding() {
        let err = ContributionPayload::from_issue_body("just some text").unwrap_err();
        assert!(matches!(err, PayloadError::MissingMarker));
    }

    #[test]
    fn test_issue_url_is_percent_encoded() {
        let config = TrackerConfig {
            source_repository: "https://github.com/user/repo".to_string(),
            contribution_guidelines: "#".to_string(),
            official_wero_website: "#".to_string(),
            data_url: String::new(),
            last_updated: Utc::now(),
        };
        let payload = ContributionPayload::new(Contribution::merchant(
            ContributionAction::Add,
            sample_merchant_draft(),
            None,
        ));

        let url = payload.issue_url(&config);
        assert!(url.starts_with("https://github.com/user/repo/issues/new?title="));
        assert!(url.ends_with("&labels=contribution"));
        // Raw spaces and newlines never survive encoding
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }
}
