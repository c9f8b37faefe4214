//! Shared test infrastructure.
//!
//! Store-backed tests are `#[ignore]`d by default. Point the usual `DB_*`
//! variables at a disposable PostgreSQL database, set `EVENTDASH_TEST_DB=1`,
//! and run them with `cargo test -- --ignored`.

#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::{Connection, PgConnection};
use tokio::sync::OnceCell;

use eventdash::config::{AppConfig, StoreConfig};
use eventdash::db;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// A store nobody listens on. Connecting fails immediately.
pub fn unreachable_store() -> StoreConfig {
    StoreConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..StoreConfig::default()
    }
}

pub fn unreachable_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        store: unreachable_store(),
        bootstrap_schema: false,
    }
}

/// The live test store. Only called from `#[ignore]`d tests, which fail loudly
/// instead of passing silently when the store is not configured.
pub fn test_store() -> StoreConfig {
    std::env::var("EVENTDASH_TEST_DB")
        .expect("EVENTDASH_TEST_DB must be set to run store-backed tests");
    StoreConfig::from_vars(|key| std::env::var(key).ok())
        .expect("invalid DB_* variables for test store")
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        store: test_store(),
        bootstrap_schema: false,
    }
}

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// One participation row to insert.
pub struct Event<'a> {
    pub category: &'a str,
    pub mode: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

/// Roll numbers unique to this test process, so parallel tests never collide.
pub fn roll_no(name: &str) -> String {
    format!("T{}-{}", std::process::id(), name)
}

static SCHEMA: OnceCell<()> = OnceCell::const_new();

/// Bootstrap the schema and replace all rows for `roll_no` with `events`.
pub async fn seed(store: &StoreConfig, roll_no: &str, events: &[Event<'_>]) {
    SCHEMA
        .get_or_init(|| async {
            db::run_migrations(store).await.expect("Failed to bootstrap schema");
        })
        .await;

    let mut conn = PgConnection::connect_with(&store.connect_options())
        .await
        .expect("Failed to connect to test store");

    sqlx::query("DELETE FROM student WHERE roll_no = $1")
        .bind(roll_no)
        .execute(&mut conn)
        .await
        .expect("Failed to clear rows");

    for e in events {
        sqlx::query(
            "INSERT INTO student (roll_no, type_of_event, mode, from_date, to_date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(roll_no)
        .bind(e.category)
        .bind(e.mode)
        .bind(date(e.from))
        .bind(date(e.to))
        .execute(&mut conn)
        .await
        .expect("Failed to insert event");
    }

    conn.close().await.expect("Failed to close test connection");
}
