#![deny(warnings)]

//! Persistence layer: the SQLite name store used for person generation.
//!
//! One table per [`NameTable`], each with a single `Name` column.

use anyhow::Context;
use fin_core::{NamePool, NameTable};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{debug, info};

/// Returns the default SQLite URL used for the local name store.
pub fn default_sqlite_url() -> &'static str {
    "sqlite://./saves/names.db"
}

/// File path behind a `sqlite:` URL, or `None` for in-memory databases.
pub fn sqlite_path(url: &str) -> Option<&str> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}

/// Create the database file and its parent directory if missing.
pub fn ensure_database_file(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok(())
}

/// Connect to `url` and create the name tables if they do not exist.
pub async fn init_db(url: &str) -> anyhow::Result<SqlitePool> {
    // Each in-memory connection is its own database.
    let max = if sqlite_path(url).is_none() { 1 } else { 4 };
    let pool = SqlitePoolOptions::new()
        .max_connections(max)
        .connect(url)
        .await
        .with_context(|| format!("connecting to {url}"))?;
    create_tables(&pool).await?;
    info!(url, "name store ready");
    Ok(pool)
}

/// Create any missing name table. Existing rows are left alone.
pub async fn create_tables(pool: &SqlitePool) -> anyhow::Result<()> {
    for table in NameTable::ALL {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (Name TEXT NOT NULL UNIQUE)",
            table.table_name()
        );
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}

/// Insert `names` into `table`, skipping ones already present. Returns the
/// number of rows added.
pub async fn seed_names<S: AsRef<str>>(
    pool: &SqlitePool,
    table: NameTable,
    names: &[S],
) -> anyhow::Result<u64> {
    let sql = format!(
        "INSERT OR IGNORE INTO {} (Name) VALUES (?)",
        table.table_name()
    );
    let mut tx = pool.begin().await?;
    let mut added = 0;
    for name in names {
        added += sqlx::query(&sql)
            .bind(name.as_ref())
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    tx.commit().await?;
    debug!(table = table.table_name(), added, "names seeded");
    Ok(added)
}

/// Every name in `table`, in insertion order.
pub async fn all_names(pool: &SqlitePool, table: NameTable) -> anyhow::Result<Vec<String>> {
    let sql = format!("SELECT Name FROM {} ORDER BY rowid", table.table_name());
    let names = sqlx::query_scalar::<_, String>(&sql)
        .fetch_all(pool)
        .await
        .with_context(|| format!("reading {}", table.table_name()))?;
    Ok(names)
}

/// Load all three name tables at once.
pub async fn load_name_pool(pool: &SqlitePool) -> anyhow::Result<NamePool> {
    let mut names = NamePool::default();
    for table in NameTable::ALL {
        *names.table_mut(table) = all_names(pool, table).await?;
    }
    Ok(names)
}

/// Seed every table from a YAML name pool file.
pub async fn seed_from_yaml(pool: &SqlitePool, path: impl AsRef<Path>) -> anyhow::Result<u64> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let names: NamePool = serde_yaml::from_str(&text)?;
    let mut added = 0;
    for table in NameTable::ALL {
        added += seed_names(pool, table, names.table(table)).await?;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn url_is_sqlite() {
        assert!(default_sqlite_url().starts_with("sqlite://"));
        assert_eq!(sqlite_path(default_sqlite_url()), Some("./saves/names.db"));
        assert_eq!(sqlite_path("sqlite::memory:"), None);
        assert_eq!(sqlite_path("sqlite:names.db?mode=rwc"), Some("names.db"));
        assert_eq!(sqlite_path("postgres://x"), None);
    }

    #[tokio::test]
    async fn seeded_names_round_trip() {
        let pool = init_db("sqlite::memory:").await.unwrap();
        let added = seed_names(&pool, NameTable::Surnames, &["Quirk", "Quark", "Quirk"])
            .await
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(
            all_names(&pool, NameTable::Surnames).await.unwrap(),
            vec!["Quirk".to_string(), "Quark".to_string()]
        );
        assert!(all_names(&pool, NameTable::MaleFirstNames)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn init_is_repeatable() {
        let pool = init_db("sqlite::memory:").await.unwrap();
        seed_names(&pool, NameTable::FemaleFirstNames, &["Quinn"])
            .await
            .unwrap();
        create_tables(&pool).await.unwrap();
        let pool_names = load_name_pool(&pool).await.unwrap();
        assert_eq!(pool_names.female_first_names, vec!["Quinn".to_string()]);
    }

    #[tokio::test]
    async fn shipped_name_file_seeds_every_table() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/names.yaml");
        let pool = init_db("sqlite::memory:").await.unwrap();
        assert!(seed_from_yaml(&pool, &path).await.unwrap() > 0);
        let names = load_name_pool(&pool).await.unwrap();
        for table in NameTable::ALL {
            assert!(!names.table(table).is_empty(), "{:?} is empty", table);
        }
    }

    #[test]
    fn bootstrap_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("names-store-{}", std::process::id()));
        let file = dir.join("nested/names.db");
        ensure_database_file(&file).unwrap();
        ensure_database_file(&file).unwrap();
        assert!(file.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    proptest! {
        #[test]
        fn file_urls_keep_their_path(name in "[a-z]{1,12}") {
            let url = format!("sqlite://./saves/{name}.db");
            let expected = format!("./saves/{name}.db");
            prop_assert_eq!(sqlite_path(&url), Some(expected.as_str()));
        }
    }
}
