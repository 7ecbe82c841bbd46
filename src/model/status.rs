// 🏷️ Support Status - Closed adoption-status enumeration
//
// One canonical set for the current dataset generation. The retired
// `coming-soon`/`none` values from the first generation are NOT accepted;
// the schema validator rejects them outright.

use serde::{Deserialize, Serialize};

// ============================================================================
// SUPPORT STATUS
// ============================================================================

/// Adoption status of a brand, bank feature, or app with respect to Wero.
///
/// The derived `Ord` is the summary-sorting order (supported first); it has
/// no semantic meaning beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportStatus {
    /// Wero is fully supported
    Supported,
    /// Support has been announced but not yet launched
    Announced,
    /// Wero is not supported
    Unsupported,
    /// Support status is unknown
    Unknown,
}

impl SupportStatus {
    pub const ALL: [SupportStatus; 4] = [
        SupportStatus::Supported,
        SupportStatus::Announced,
        SupportStatus::Unsupported,
        SupportStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "supported",
            SupportStatus::Announced => "announced",
            SupportStatus::Unsupported => "unsupported",
            SupportStatus::Unknown => "unknown",
        }
    }

    /// Human-facing label for badges and legends
    pub fn label(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "Supported",
            SupportStatus::Announced => "Announced",
            SupportStatus::Unsupported => "Unsupported",
            SupportStatus::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "Wero is fully supported",
            SupportStatus::Announced => "Support has been announced but not yet available",
            SupportStatus::Unsupported => "Wero is not supported",
            SupportStatus::Unknown => "Support status is unknown",
        }
    }
}

impl std::fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EVIDENCE
// ============================================================================

/// A link backing a status claim (press release, bank announcement, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLink {
    pub label: String,
    pub url: String,
}

/// A status cell together with its evidence. Contributions attach these when
/// proposing a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSupport {
    pub status: SupportStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FeatureSupport {
    pub fn new(status: SupportStatus) -> Self {
        FeatureSupport {
            status,
            sources: Vec::new(),
            notes: None,
        }
    }

    pub fn with_source(mut self, label: &str, url: &str) -> Self {
        self.sources.push(SourceLink {
            label: label.to_string(),
            url: url.to_string(),
        });
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
