//! Deterministic visual fingerprint glyphs for launch links.
//!
//! This module contains the glyph pipeline:
//! - Encoding a link into a fixed-upper-bound integer fingerprint
//! - Mapping the fingerprint onto a binary-colored cell grid
//! - Rendering the grid as text
//!
//! The glyph gives every destination link a visually distinct, stable
//! pattern. It is not a barcode: there is no decoder, no error correction,
//! and nothing here is scannable.

pub mod encoder;
pub mod grid;

// Re-export main functionality
pub use encoder::{encode_fingerprint, GlyphEncoder, FINGERPRINT_CELLS};
pub use grid::{Cell, GlyphGrid, GRID_COLUMNS};
