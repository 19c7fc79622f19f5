//! AR launch-link validation and construction.
//!
//! The AR experience itself runs on an external third-party host; this crate
//! only builds and vets the links handed to it. A valid launch link is https,
//! addresses a DNS host (never an IP literal), and its registrable domain is
//! on the launch allowlist. Registrable-domain splitting goes through the
//! Public Suffix List because the production host sits under `vercel.app`,
//! which is itself a public suffix.

use psl::{List, Psl};
use url::{Host, Url};

use crate::error::AtlasError;
use crate::glyph::GlyphGrid;
use crate::types::HeritageSite;

/// Registrable domains launch links may point at.
pub const ALLOWED_LAUNCH_DOMAINS: &[&str] = &["templeexplorer-ar.vercel.app"];

/// Static device requirements for the AR experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArCompatibility {
    pub min_ios: &'static str,
    pub min_android: &'static str,
    pub camera: &'static str,
    pub network: &'static str,
}

/// The requirements panel shown alongside every launch link.
pub const COMPATIBILITY: ArCompatibility = ArCompatibility {
    min_ios: "iOS 12+",
    min_android: "Android 8+",
    camera: "Rear camera required",
    network: "Stable connection needed",
};

/// A vetted, ready-to-present AR launch.
#[derive(Debug, Clone, PartialEq)]
pub struct ArLaunch {
    /// Id of the site this launch belongs to.
    pub site_id: u32,
    /// Site title, for display next to the link.
    pub title: String,
    /// The validated launch URL.
    pub url: Url,
    /// Per-site slug, the last path segment of the launch URL.
    pub slug: Option<String>,
}

impl ArLaunch {
    /// The visual fingerprint glyph for this launch link.
    pub fn glyph(&self) -> GlyphGrid {
        GlyphGrid::from_url(self.url.as_str())
    }
}

/// Validate a launch link.
///
/// # Examples
///
/// ```
/// use templeatlas::ar::validate_launch_url;
///
/// let url = validate_launch_url("https://templeexplorer-ar.vercel.app/konark").unwrap();
/// assert_eq!(url.path(), "/konark");
///
/// assert!(validate_launch_url("http://templeexplorer-ar.vercel.app/konark").is_err());
/// assert!(validate_launch_url("https://example.com/konark").is_err());
/// ```
pub fn validate_launch_url(raw: &str) -> Result<Url, AtlasError> {
    let url = Url::parse(raw)?;

    if url.scheme() != "https" {
        return Err(AtlasError::InvalidScheme);
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        // IP literals and missing hosts are both rejected.
        _ => return Err(AtlasError::HostNotDns),
    };

    let registrable = registrable_domain(&host)?;
    if !ALLOWED_LAUNCH_DOMAINS.contains(&registrable.as_str()) {
        return Err(AtlasError::HostNotAllowed(host));
    }

    Ok(url)
}

/// The registrable domain of a host under the Public Suffix List.
fn registrable_domain(host: &str) -> Result<String, AtlasError> {
    let domain = List
        .domain(host.as_bytes())
        .ok_or_else(|| AtlasError::UnknownSuffix(host.to_string()))?;

    std::str::from_utf8(domain.as_bytes())
        .map(|s| s.to_string())
        .map_err(|_| AtlasError::HostNotDns)
}

/// Extract the per-site slug: the last non-empty path segment.
pub fn slug_for_url(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|segment| segment.to_string())
}

/// Build the AR launch for a site, if it carries a link.
///
/// Sites without a link yield `Ok(None)`; sites with an invalid link are an
/// error, since serving a broken launch button is worse than serving none.
pub fn launch_for_site(site: &HeritageSite) -> Result<Option<ArLaunch>, AtlasError> {
    let raw = match &site.ar_url {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let url = validate_launch_url(raw)?;
    let slug = slug_for_url(&url);

    Ok(Some(ArLaunch {
        site_id: site.id,
        title: site.title.clone(),
        url,
        slug,
    }))
}
