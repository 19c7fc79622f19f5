//! Core data structures for heritage-site records.

use serde::{Deserialize, Serialize};

/// The six narrative sections kept for a site's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteHistory {
    /// Ancient origins of the site.
    pub ancient: String,
    /// Who built it and how.
    pub construction: String,
    /// Religious and cultural significance.
    pub significance: String,
    /// Legends attached to the site.
    pub legend: String,
    /// Architectural character.
    pub architecture: String,
    /// The site in the modern era.
    pub modern_history: String,
}

/// A heritage-site record as served by the catalog.
///
/// Field names serialize in camelCase so records match the document shape the
/// content store uses (`arUrl`, `isUNESCO`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeritageSite {
    /// Stable record id, used for key lookups.
    pub id: u32,
    /// Display title (e.g. "Konark Sun Temple").
    pub title: String,
    /// Human-readable location.
    pub location: String,
    /// Century or period of origin.
    pub year: String,
    /// Hero image URL.
    pub image: String,
    /// Short description shown on listing cards.
    pub description: String,
    /// Category label (e.g. "Hindu Temple").
    pub category: String,
    /// Whether the site is UNESCO-listed.
    #[serde(rename = "isUNESCO", default)]
    pub unesco: bool,
    /// External AR experience link, when the site is AR-ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar_url: Option<String>,
    /// Elevation, for mountain sites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<String>,
    /// Construction period, when distinct from `year`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built: Option<String>,
    /// Full history narrative, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<SiteHistory>,
}

impl HeritageSite {
    /// Check if the site carries an AR experience link.
    pub fn is_ar_ready(&self) -> bool {
        self.ar_url.is_some()
    }

    /// Check if the site has a full history narrative.
    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    /// The period label shown on detail cards: `built` when present,
    /// otherwise `elevation` (mountain sites list altitude instead).
    pub fn period_or_elevation(&self) -> Option<&str> {
        self.built
            .as_deref()
            .or(self.elevation.as_deref())
    }
}

/// Aggregate statistics computed over the records a store serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    /// Total number of records.
    pub total_sites: usize,
    /// Records flagged UNESCO.
    pub unesco_sites: usize,
    /// Records carrying an AR link.
    pub ar_ready_sites: usize,
    /// Distinct category labels.
    pub categories: usize,
}
