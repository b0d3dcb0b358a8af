// tests/unit_store.rs
use chrono::{Duration, Utc};
use seoscore_core::analysis::Analyzer;
use seoscore_core::error::SeoError;
use seoscore_core::store::{PostDraft, PostStore};
use tempfile::TempDir;

fn draft(title: &str, score: u8) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        content: "# Heading\ncoffee notes".to_string(),
        keyword: "coffee".to_string(),
        score,
    }
}

#[test]
fn test_create_assigns_id_and_timestamps() {
    let mut store = PostStore::default();
    let post = store.create(Some("demo.myshopify.com".into()), draft("First", 40)).unwrap().clone();
    assert!(!post.id.is_empty());
    assert_eq!(post.created_at, post.updated_at);
    assert_eq!(post.score, 40);
    assert_eq!(store.posts.len(), 1);
    assert_eq!(store.get(&post.id), Some(&post));
}

#[test]
fn test_create_requires_title() {
    let mut store = PostStore::default();
    assert!(matches!(store.create(None, draft("", 0)), Err(SeoError::MissingTitle)));
    assert!(store.posts.is_empty());
}

#[test]
fn test_update_replaces_fields() {
    let mut store = PostStore::default();
    let id = store.create(Some("a".into()), draft("Old", 10)).unwrap().id.clone();
    let updated = store.update(&id, Some("a"), draft("New", 75)).unwrap();
    assert_eq!(updated.title, "New");
    assert_eq!(updated.score, 75);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn test_update_checks_shop_and_id() {
    let mut store = PostStore::default();
    let id = store.create(Some("a".into()), draft("Mine", 10)).unwrap().id.clone();

    assert!(matches!(
        store.update(&id, Some("b"), draft("Theirs", 90)),
        Err(SeoError::ShopMismatch { .. })
    ));
    assert!(matches!(
        store.update("missing", Some("a"), draft("X", 1)),
        Err(SeoError::PostNotFound(_))
    ));
    assert!(matches!(
        store.update(&id, Some("a"), draft("", 1)),
        Err(SeoError::MissingTitle)
    ));
    assert!(matches!(
        store.update(&id, None, draft("Anonymous", 1)),
        Err(SeoError::ShopMismatch { .. })
    ));
    assert_eq!(store.get(&id).map(|p| p.title.as_str()), Some("Mine"));
}

#[test]
fn test_update_unscoped_post_from_any_shop() {
    let mut store = PostStore::default();
    let id = store.create(None, draft("Unscoped", 10)).unwrap().id.clone();

    let updated = store.update(&id, Some("shop-a"), draft("Claimed", 30)).unwrap();
    assert_eq!(updated.title, "Claimed");
    assert_eq!(updated.shop, None);

    let updated = store.update(&id, None, draft("Again", 35)).unwrap();
    assert_eq!(updated.score, 35);
}

#[test]
fn test_delete() {
    let mut store = PostStore::default();
    let id = store.create(None, draft("Gone", 10)).unwrap().id.clone();
    let removed = store.delete(&id).unwrap();
    assert_eq!(removed.title, "Gone");
    assert!(store.posts.is_empty());
    assert!(matches!(store.delete(&id), Err(SeoError::PostNotFound(_))));
}

#[test]
fn test_list_newest_first() {
    let mut store = PostStore::default();
    for title in ["oldest", "middle", "newest"] {
        store.create(None, draft(title, 0)).unwrap();
    }
    let base = Utc::now();
    for (i, post) in store.posts.iter_mut().enumerate() {
        post.created_at = base + Duration::seconds(i64::try_from(i).unwrap_or(0));
    }
    let titles: Vec<&str> = store.list().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_stats_average() {
    let mut store = PostStore::default();
    assert_eq!(store.stats().average_score, None);
    assert_eq!(store.stats().count, 0);

    for score in [40, 60, 95] {
        store.create(None, draft("Post", score)).unwrap();
    }
    let stats = store.stats();
    assert_eq!(stats.count, 3);
    assert!((stats.average_score.unwrap_or_default() - 65.0).abs() < 1e-9);
    assert_eq!(stats.best_score, Some(95));
    assert_eq!(stats.worst_score, Some(40));
}

#[test]
fn test_save_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.toml");

    let mut store = PostStore::default();
    store.create(Some("shop".into()), draft("Saved", 55)).unwrap();
    store.create(None, draft("Multi\nline \"quoted\" title", 5)).unwrap();
    store.save(&path).unwrap();

    let loaded = PostStore::load(&path).unwrap();
    assert_eq!(loaded.posts, store.posts);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_missing_file_is_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = PostStore::load(&dir.path().join("nope.toml")).unwrap();
    assert!(store.posts.is_empty());
}

#[test]
fn test_invalid_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.toml");
    std::fs::write(&path, "[[posts]]\nid = ").unwrap();
    assert!(matches!(PostStore::load(&path), Err(SeoError::TomlParse { .. })));
}

#[test]
fn test_rescore_updates_stale_scores() {
    let mut store = PostStore::default();
    store.create(None, draft("Coffee", 99)).unwrap();
    store.create(None, PostDraft { keyword: String::new(), ..draft("Empty", 0) }).unwrap();

    let analyzer = Analyzer::default();
    let changed = store.rescore(&analyzer);
    assert_eq!(changed, 1);

    let expected = analyzer.analyze(&store.posts[0].as_input()).score;
    assert_eq!(store.posts[0].score, expected);
    assert_eq!(store.posts[1].score, 0);
    assert_eq!(store.rescore(&analyzer), 0);
}
