//! Fingerprint encoding functionality.
//!
//! This module provides the main API for encoding a link into its integer
//! fingerprint.

/// Maximum number of values in a fingerprint.
///
/// Input beyond the first 64 characters never contributes: the output is
/// truncated, not the input rejected.
pub const FINGERPRINT_CELLS: usize = 64;

/// Encode a string into its visual fingerprint.
///
/// For each character at zero-based index `i`, taking at most the first
/// [`FINGERPRINT_CELLS`] characters, the fingerprint value is the character's
/// Unicode scalar value plus `i`. The positional term salts repeated
/// characters, so the same character at different positions contributes
/// different values.
///
/// The encoding is a pure function: identical inputs always produce identical
/// fingerprints, any string (including empty or non-ASCII) is accepted, and
/// there are no error conditions.
///
/// # Arguments
///
/// * `input` - The string to fingerprint, typically a launch URL
///
/// # Returns
///
/// The fingerprint values in original character order. The length is always
/// `min(input.chars().count(), 64)`.
///
/// # Examples
///
/// ```
/// use templeatlas::glyph::encode_fingerprint;
///
/// assert_eq!(encode_fingerprint("AB"), vec![65, 67]);
/// assert_eq!(encode_fingerprint(""), Vec::<u32>::new());
/// ```
pub fn encode_fingerprint(input: &str) -> Vec<u32> {
    input
        .chars()
        .take(FINGERPRINT_CELLS)
        .enumerate()
        .map(|(i, c)| c as u32 + i as u32)
        .collect()
}

/// Fingerprint encoder with configurable options.
///
/// This struct provides an instance-based encoding interface for callers that
/// hold an encoder at a seam rather than calling the free function.
#[derive(Debug, Clone, Copy)]
pub struct GlyphEncoder {
    // Future: alternate cell budgets for larger display grids.
}

impl GlyphEncoder {
    /// Create a new encoder with default settings.
    pub fn new() -> Self {
        Self {}
    }

    /// Encode a string using this encoder's configuration.
    pub fn encode(&self, input: &str) -> Vec<u32> {
        encode_fingerprint(input)
    }
}

impl Default for GlyphEncoder {
    fn default() -> Self {
        Self::new()
    }
}
