#![deny(warnings)]

use persistence::{default_sqlite_url, ensure_database_file, sqlite_path};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let url = args.next().unwrap_or_else(|| default_sqlite_url().to_string());
    let seed_file = args
        .next()
        .unwrap_or_else(|| "assets/names.yaml".to_string());
    if let Some(path) = sqlite_path(&url) {
        ensure_database_file(path)?;
    }
    let pool = persistence::init_db(&url).await?;
    let added = persistence::seed_from_yaml(&pool, &seed_file).await?;
    println!("DB migrated at {} ({} names added from {})", url, added, seed_file);
    Ok(())
}
