//! Tests for catalog records, stores, quiz, gallery, and statistics.

use std::io::Write;

use templeatlas::catalog::{
    catalog_stats, categories, category_breakdown, digest_hex, filter_by_category,
    gallery_for_site, quiz_for_site, record_digest, score_quiz, BuiltinStore, GalleryCursor,
    JsonStore, ScoreBand, SiteStore,
};
use templeatlas::types::HeritageSite;
use templeatlas::AtlasError;

fn write_catalog(sites: &[HeritageSite]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(sites).unwrap().as_bytes())
        .unwrap();
    file
}

#[test]
fn test_builtin_store_serves_six_records() {
    let store = BuiltinStore::new();
    let sites = store.fetch_all().unwrap();

    assert_eq!(sites.len(), 6);
    assert_eq!(sites[0].title, "Kedarnath Temple");
    assert_eq!(sites[5].title, "Khajuraho Temples");
}

#[test]
fn test_fetch_by_id_hit_and_miss() {
    let store = BuiltinStore::new();

    assert_eq!(
        store.fetch_by_id(3).unwrap().unwrap().title,
        "Meenakshi Temple"
    );
    assert_eq!(store.fetch_by_id(1000).unwrap(), None);
}

#[test]
fn test_json_store_serves_same_records_as_builtin() {
    let builtin = BuiltinStore::new().fetch_all().unwrap();
    let file = write_catalog(&builtin);

    let store = JsonStore::new(file.path());
    assert_eq!(store.fetch_all().unwrap(), builtin);
}

#[test]
fn test_json_store_errors_are_typed() {
    let missing = JsonStore::new("/no/such/catalog.json");
    assert!(matches!(
        missing.fetch_all().unwrap_err(),
        AtlasError::CatalogRead(_)
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"id\": \"not-a-number\"}]").unwrap();
    let malformed = JsonStore::new(file.path());
    assert!(matches!(
        malformed.fetch_all().unwrap_err(),
        AtlasError::CatalogParse(_)
    ));
}

#[test]
fn test_json_store_accepts_minimal_records() {
    // A document store may omit every optional field.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"[{
            "id": 42,
            "title": "Rani ki Vav",
            "location": "Patan, Gujarat, India",
            "year": "11th Century",
            "image": "https://images.example.com/rani-ki-vav.jpg",
            "description": "An intricately constructed stepwell.",
            "category": "Stepwell"
        }]"#,
    )
    .unwrap();

    let store = JsonStore::new(file.path());
    let site = store.fetch_by_id(42).unwrap().unwrap();

    assert_eq!(site.title, "Rani ki Vav");
    assert!(!site.unesco);
    assert!(!site.is_ar_ready());
    assert!(store.fetch_ar_sites().unwrap().is_empty());
}

#[test]
fn test_quiz_scoring_end_to_end() {
    let site = BuiltinStore::new().fetch_by_id(4).unwrap().unwrap();
    let quiz = quiz_for_site(&site);

    assert_eq!(quiz.len(), 5);
    assert!(quiz.iter().all(|q| q.question.contains("Golden Temple")));

    let all_correct: Vec<Option<usize>> =
        quiz.iter().map(|q| Some(q.correct_answer)).collect();
    assert_eq!(score_quiz(&all_correct, &quiz).band(), ScoreBand::Excellent);

    let all_wrong: Vec<Option<usize>> = quiz
        .iter()
        .map(|q| Some((q.correct_answer + 1) % q.options.len()))
        .collect();
    let score = score_quiz(&all_wrong, &quiz);
    assert_eq!(score.correct, 0);
    assert_eq!(score.band(), ScoreBand::NeedsReview);
}

#[test]
fn test_gallery_filtering_and_navigation() {
    let site = BuiltinStore::new().fetch_by_id(5).unwrap().unwrap();
    let gallery = gallery_for_site(&site);

    assert_eq!(gallery.len(), 6);
    assert_eq!(categories(&gallery).len(), 6);

    let cultural = filter_by_category(&gallery, "Cultural");
    assert_eq!(cultural.len(), 1);

    let mut cursor = GalleryCursor::new(gallery.len()).unwrap();
    for expected in [1, 2, 3, 4, 5, 0] {
        assert_eq!(cursor.next(), expected);
    }
    assert_eq!(cursor.previous(), 5);
}

#[test]
fn test_stats_track_catalog_edits() {
    let mut sites = BuiltinStore::new().fetch_all().unwrap();
    let baseline = catalog_stats(&sites);
    assert_eq!(baseline.unesco_sites, 2);
    assert_eq!(baseline.categories, 2);

    // Dropping the only Sikh temple removes a category.
    sites.retain(|site| site.category != "Sikh Temple");
    let edited = catalog_stats(&sites);
    assert_eq!(edited.total_sites, 5);
    assert_eq!(edited.categories, 1);
    assert_eq!(
        category_breakdown(&sites),
        vec![("Hindu Temple".to_string(), 5)]
    );
}

#[test]
fn test_record_digest_detects_remote_edits() {
    let store = BuiltinStore::new();
    let original = store.fetch_by_id(2).unwrap().unwrap();
    let before = record_digest(&original).unwrap();

    // Same record served through the JSON store digests identically.
    let file = write_catalog(&[original.clone()]);
    let fetched = JsonStore::new(file.path())
        .fetch_by_id(2)
        .unwrap()
        .unwrap();
    assert_eq!(record_digest(&fetched).unwrap(), before);

    // An upstream edit moves the digest.
    let mut edited = original;
    edited.location = "Konark, Odisha, India".to_string();
    assert_ne!(record_digest(&edited).unwrap(), before);

    assert_eq!(digest_hex(before).len(), 16);
}
