//! Per-site gallery entries, category filtering, and navigation.

use serde::{Deserialize, Serialize};

use crate::types::HeritageSite;

/// One gallery entry for a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: u32,
    pub url: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub photographer: String,
    pub date: String,
}

/// Build the six templated gallery entries for a site.
///
/// All entries currently reuse the site's hero image; the titles,
/// descriptions, and attributions are a fixed template.
pub fn gallery_for_site(site: &HeritageSite) -> Vec<GalleryImage> {
    let entries = [
        (
            "Main View",
            "The magnificent facade showcasing intricate architectural details",
            "Architecture",
            "Heritage Documentation Team",
            "2024",
        ),
        (
            "Interior",
            "Sacred interior spaces with traditional decorative elements",
            "Interior",
            "Cultural Heritage Society",
            "2024",
        ),
        (
            "Details",
            "Close-up view of intricate stone carvings and sculptural work",
            "Details",
            "Archaeological Survey",
            "2024",
        ),
        (
            "Surroundings",
            "The heritage site in its natural and cultural landscape",
            "Landscape",
            "Tourism Department",
            "2024",
        ),
        (
            "Historical",
            "Rare historical photograph from archives",
            "Historical",
            "National Archives",
            "1950s",
        ),
        (
            "Festival",
            "The site during traditional cultural celebrations",
            "Cultural",
            "Cultural Documentation",
            "2023",
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(index, (view, description, category, photographer, date))| GalleryImage {
            id: index as u32 + 1,
            url: site.image.clone(),
            title: format!("{} - {}", site.title, view),
            description: description.to_string(),
            category: category.to_string(),
            photographer: photographer.to_string(),
            date: date.to_string(),
        })
        .collect()
}

/// Unique categories in first-seen order.
pub fn categories(images: &[GalleryImage]) -> Vec<String> {
    let mut seen = Vec::new();
    for image in images {
        if !seen.contains(&image.category) {
            seen.push(image.category.clone());
        }
    }
    seen
}

/// Entries matching one category.
pub fn filter_by_category<'a>(
    images: &'a [GalleryImage],
    category: &str,
) -> Vec<&'a GalleryImage> {
    images
        .iter()
        .filter(|image| image.category == category)
        .collect()
}

/// Wrapping cursor over a gallery view.
///
/// Next from the last entry wraps to the first and previous from the first
/// wraps to the last, so arrow navigation never dead-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    /// Cursor over `len` entries, starting at the first. `None` for an empty
    /// view, which has nothing to navigate.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { index: 0, len })
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sites::site_by_id;

    fn kedarnath_gallery() -> Vec<GalleryImage> {
        gallery_for_site(&site_by_id(0).unwrap())
    }

    #[test]
    fn test_gallery_shape() {
        let gallery = kedarnath_gallery();
        assert_eq!(gallery.len(), 6);

        for (index, image) in gallery.iter().enumerate() {
            assert_eq!(image.id as usize, index + 1);
            assert!(image.title.starts_with("Kedarnath Temple - "));
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let gallery = kedarnath_gallery();
        assert_eq!(
            categories(&gallery),
            vec![
                "Architecture",
                "Interior",
                "Details",
                "Landscape",
                "Historical",
                "Cultural"
            ]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let gallery = kedarnath_gallery();

        let historical = filter_by_category(&gallery, "Historical");
        assert_eq!(historical.len(), 1);
        assert_eq!(historical[0].date, "1950s");

        assert!(filter_by_category(&gallery, "Aerial").is_empty());
    }

    #[test]
    fn test_cursor_wraps_forward() {
        let mut cursor = GalleryCursor::new(3).unwrap();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.next(), 1);
        assert_eq!(cursor.next(), 2);
        assert_eq!(cursor.next(), 0);
    }

    #[test]
    fn test_cursor_wraps_backward() {
        let mut cursor = GalleryCursor::new(3).unwrap();
        assert_eq!(cursor.previous(), 2);
        assert_eq!(cursor.previous(), 1);
    }

    #[test]
    fn test_cursor_single_entry() {
        let mut cursor = GalleryCursor::new(1).unwrap();
        assert_eq!(cursor.next(), 0);
        assert_eq!(cursor.previous(), 0);
    }

    #[test]
    fn test_cursor_empty_view() {
        assert!(GalleryCursor::new(0).is_none());
    }
}
