//! Aggregate statistics over catalog records.
//!
//! Computed from the records actually served, so the numbers can never drift
//! from the catalog the way a hardcoded stats panel can.

use crate::types::{HeritageSite, SiteStats};

/// Compute aggregate statistics for a set of records.
pub fn catalog_stats(sites: &[HeritageSite]) -> SiteStats {
    SiteStats {
        total_sites: sites.len(),
        unesco_sites: sites.iter().filter(|site| site.unesco).count(),
        ar_ready_sites: sites.iter().filter(|site| site.is_ar_ready()).count(),
        categories: category_breakdown(sites).len(),
    }
}

/// Record counts per category, in first-seen order.
pub fn category_breakdown(sites: &[HeritageSite]) -> Vec<(String, usize)> {
    let mut breakdown: Vec<(String, usize)> = Vec::new();
    for site in sites {
        match breakdown.iter_mut().find(|(name, _)| *name == site.category) {
            Some((_, count)) => *count += 1,
            None => breakdown.push((site.category.clone(), 1)),
        }
    }
    breakdown
}
