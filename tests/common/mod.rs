#![allow(dead_code)]

use axum_test::TestServer;
use snaplink::application::services::LinkService;
use snaplink::infrastructure::persistence::{MIGRATOR, SqliteLinkRepository};
use snaplink::routes::app_router;
use snaplink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const FIXTURE_DIST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dist");

/// Opens a fresh, migrated in-memory database.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

/// Opens a fresh, migrated database file shared by `connections` connections.
///
/// Unlike [`create_test_pool`], writers on different connections really race
/// inside SQLite. The database lives as long as the returned [`TempDir`].
pub async fn create_file_test_pool(connections: u32) -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("links.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(connections)
        .min_connections(connections)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    (pool, dir)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, long_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(repo));

    AppState::new(link_service, FIXTURE_DIST, None)
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}

pub fn index_html() -> String {
    std::fs::read_to_string(format!("{FIXTURE_DIST}/index.html")).unwrap()
}
