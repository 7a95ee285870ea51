//! Integration tests for the SQLite record store behind the retrieval
//! service.

use knowledge_recall::config::{parse_config, Config};
use knowledge_recall::db;
use knowledge_recall::import::{import_into, parse_records};
use knowledge_recall::migrate;
use knowledge_recall::models::{ContentKind, NewRecord};
use knowledge_recall::search::search_records;
use knowledge_recall::sqlite_store::SqliteStore;
use knowledge_recall::store::RecordStore;
use knowledge_recall_core::related::TitleRelated;
use knowledge_recall_core::retrieval::RetrievalService;
use tempfile::TempDir;

fn test_config(tmp: &TempDir, strategy: &str) -> Config {
    parse_config(&format!(
        "[db]\npath = \"{}/data/recall.sqlite\"\n\n[retrieval]\nrelated_strategy = \"{}\"\n",
        tmp.path().display(),
        strategy
    ))
    .unwrap()
}

async fn open_store(cfg: &Config) -> SqliteStore {
    migrate::run_migrations(cfg).await.unwrap();
    SqliteStore::new(db::connect(cfg).await.unwrap())
}

fn page(title: &str, content: &str, summary: Option<&str>) -> NewRecord {
    NewRecord {
        title: title.to_string(),
        content: content.to_string(),
        summary: summary.map(str::to_string),
        url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        kind: ContentKind::Page,
    }
}

#[tokio::test]
async fn test_migrations_idempotent() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, "none");
    migrate::run_migrations(&cfg).await.unwrap();
    migrate::run_migrations(&cfg).await.unwrap();
}

#[tokio::test]
async fn test_insert_assigns_ids_and_fetch_preserves_order() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, "none");
    let store = open_store(&cfg).await;

    let a = store.insert_record(&page("First", "one", None)).await.unwrap();
    let b = store
        .insert_record(&NewRecord {
            kind: ContentKind::Video,
            ..page("Clip", "two", None)
        })
        .await
        .unwrap();
    let c = store
        .insert_record(&page("Third", "three", Some("short")))
        .await
        .unwrap();
    assert!(a < b && b < c);

    let pages = store.fetch_all(ContentKind::Page).await.unwrap();
    let ids: Vec<i64> = pages.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a, c]);
    assert_eq!(pages[1].summary.as_deref(), Some("short"));

    let videos = store.fetch_all(ContentKind::Video).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].kind, ContentKind::Video);

    assert!(store.get_record(b, ContentKind::Page).await.unwrap().is_none());
    assert_eq!(
        store
            .get_record(b, ContentKind::Video)
            .await
            .unwrap()
            .map(|r| r.title),
        Some("Clip".to_string())
    );

    let stored = store.get_stored(c).await.unwrap().unwrap();
    assert_eq!(stored.record.title, "Third");
    assert!(stored.captured_at.ends_with('Z'));

    store.pool().close().await;
}

#[tokio::test]
async fn test_service_over_sqlite_ranks_neural_example() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, "none");
    let store = open_store(&cfg).await;
    store
        .insert_record(&page(
            "Neural Networks",
            "deep learning basics",
            Some("intro to neural nets"),
        ))
        .await
        .unwrap();
    store
        .insert_record(&page("Cooking", "neural networks are tasty analogy", None))
        .await
        .unwrap();
    store
        .insert_record(&page("Gardening", "tomatoes", None))
        .await
        .unwrap();

    let service = RetrievalService::new(store);
    let results = service.search("NEURAL", None).await.unwrap();
    let scored: Vec<(i64, u32)> = results.iter().map(|r| (r.id, r.score)).collect();
    assert_eq!(scored, vec![(1, 5), (2, 1)]);

    let again = service.search("NEURAL", None).await.unwrap();
    assert_eq!(results, again);

    assert!(service
        .related_content(1, ContentKind::Page, None)
        .await
        .unwrap()
        .is_empty());

    service.store().pool().close().await;
}

#[tokio::test]
async fn test_title_strategy_over_sqlite() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, "title");
    let store = open_store(&cfg).await;
    for p in [
        page("Tokio", "async runtime", None),
        page("Tokio internals", "scheduler", None),
        page("Axum", "web framework built on tokio", None),
        page("Baking", "bread", None),
    ] {
        store.insert_record(&p).await.unwrap();
    }

    let service = RetrievalService::with_related(store, Box::new(TitleRelated));
    let out = service
        .related_content(1, ContentKind::Page, Some(5))
        .await
        .unwrap();
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);

    service.store().pool().close().await;
}

#[tokio::test]
async fn test_search_records_uses_config_default_limit() {
    let tmp = TempDir::new().unwrap();
    let cfg = parse_config(&format!(
        "[db]\npath = \"{}/data/recall.sqlite\"\n\n[retrieval]\ndefault_limit = 2\n",
        tmp.path().display()
    ))
    .unwrap();
    let store = open_store(&cfg).await;
    for i in 0..5 {
        store
            .insert_record(&page(&format!("Note {}", i), "shared text", None))
            .await
            .unwrap();
    }
    store.pool().close().await;

    let results = search_records(&cfg, "shared", None, false).await.unwrap();
    assert_eq!(results.len(), 2);
    // Equal scores keep insertion order.
    assert_eq!(results[0].id, 1);
    assert_eq!(results[1].id, 2);

    let all = search_records(&cfg, "shared", Some(50), true).await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|r| r.explain.is_some()));

    assert!(search_records(&cfg, "shared", Some(0), false)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_import_skips_blank_titles() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, "none");
    let store = open_store(&cfg).await;

    let records = parse_records(
        r#"[
            {"title": "Kept", "content": "body", "url": "https://k"},
            {"title": "  ", "content": "body", "url": "https://blank"},
            {"title": "Clip", "content": "transcript", "url": "https://v", "kind": "video"}
        ]"#,
    )
    .unwrap();
    let stats = import_into(&store, &records).await.unwrap();
    assert_eq!(stats.inserted, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.ids.len(), 2);

    assert_eq!(store.fetch_all(ContentKind::Page).await.unwrap().len(), 1);
    assert_eq!(store.fetch_all(ContentKind::Video).await.unwrap().len(), 1);

    store.pool().close().await;
}

#[tokio::test]
async fn test_missing_table_propagates_store_error() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, "none");
    // No migrations, so the records table does not exist.
    let store = SqliteStore::new(db::connect(&cfg).await.unwrap());
    let service = RetrievalService::new(store);
    assert!(service.search("anything", None).await.is_err());
    service.store().pool().close().await;
}
