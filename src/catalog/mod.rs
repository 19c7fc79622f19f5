//! Heritage-site content: records, retrieval, quiz, gallery, and statistics.
//!
//! This module contains everything the catalog serves:
//! - The builtin site records and their accessors
//! - Record retrieval behind the [`SiteStore`] trait
//! - Per-site trivia quizzes and scoring
//! - Per-site gallery entries and navigation
//! - Aggregate statistics and record digests

pub mod digest;
pub mod gallery;
pub mod quiz;
pub mod sites;
pub mod stats;
pub mod store;

// Re-export main functionality
pub use digest::{digest_hex, record_digest};
pub use gallery::{categories, filter_by_category, gallery_for_site, GalleryCursor, GalleryImage};
pub use quiz::{quiz_for_site, score_quiz, Difficulty, QuizQuestion, QuizScore, ScoreBand};
pub use sites::{ar_sites, builtin_sites, featured_sites, site_by_id};
pub use stats::{catalog_stats, category_breakdown};
pub use store::{BuiltinStore, JsonStore, SiteStore};
