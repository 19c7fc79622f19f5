//! templeatlas - heritage-site catalog and AR launch toolkit
//!
//! This crate serves the heritage-site records behind a temple-exploration
//! experience: the site listings and histories, per-site trivia quizzes and
//! gallery views, and the external AR launch links each site carries. Every
//! launch link gets a deterministic visual fingerprint glyph so destinations
//! are visually distinguishable at a glance.
//!
//! # Features
//!
//! - **Catalog**: six builtin site records, or any JSON document store with
//!   the same record shape, behind the [`SiteStore`](catalog::SiteStore) trait
//! - **Glyphs**: stable link fingerprints laid out on a binary 8-column grid
//! - **AR launches**: https-only, allowlist-vetted launch links with slugs
//! - **Quiz and gallery**: the per-site content panels, with scoring and
//!   navigation
//!
//! # Quick Start
//!
//! ```
//! use templeatlas::catalog::{BuiltinStore, SiteStore};
//! use templeatlas::ar::launch_for_site;
//! use templeatlas::glyph::GlyphGrid;
//!
//! let store = BuiltinStore::new();
//! let konark = store.fetch_by_id(2)?.expect("builtin record");
//!
//! // Vet the AR launch link and take its slug.
//! let launch = launch_for_site(&konark)?.expect("Konark is AR-ready");
//! assert_eq!(launch.slug.as_deref(), Some("konark"));
//!
//! // The link's visual fingerprint, same on every call.
//! let glyph = GlyphGrid::from_url(launch.url.as_str());
//! assert_eq!(glyph, launch.glyph());
//! # Ok::<(), templeatlas::AtlasError>(())
//! ```
//!
//! # Glyphs are not barcodes
//!
//! The fingerprint glyph gives each link a visually distinct, stable pattern
//! and nothing more: there is no decoder, no error correction, and no QR
//! format compliance. Do not present it as scannable.

// Re-export the error type
pub use error::AtlasError;

// Re-export core record types
pub use types::{HeritageSite, SiteHistory, SiteStats};

// Re-export the glyph pipeline
pub use glyph::{encode_fingerprint, Cell, GlyphEncoder, GlyphGrid, FINGERPRINT_CELLS};

// Re-export catalog retrieval
pub use catalog::{BuiltinStore, JsonStore, SiteStore};

// Re-export AR launches
pub use ar::{launch_for_site, validate_launch_url, ArLaunch};

// Module declarations
pub mod ar;
pub mod catalog;
pub mod error;
pub mod glyph;
pub mod logging;
pub mod types;
