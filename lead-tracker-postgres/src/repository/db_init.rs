//! Schema setup and teardown.
//!
//! `migrations/*.sql` create the collections, their indexes and the change-notification
//! triggers; `cleanup/*.sql` remove them again.

use sqlx::PgPool;
use std::fs;
use std::path::Path;

/// Applies every migration file in ascending file-name order
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    run_scripts(pool, &migrations_dir, true).await
}

/// Applies every cleanup file in descending file-name order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    run_scripts(pool, &cleanup_dir, false).await
}

async fn run_scripts(pool: &PgPool, dir: &Path, ascending: bool) -> Result<(), sqlx::Error> {
    let mut scripts: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    scripts.sort();
    if !ascending {
        scripts.reverse();
    }

    for path in scripts {
        let sql = fs::read_to_string(&path).map_err(sqlx::Error::Io)?;
        tracing::debug!(script = %path.display(), "executing schema script");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn test_init_and_cleanup() -> Result<(), Box<dyn std::error::Error>> {
        let pool = PgPool::connect(&crate::test_helper::database_url()).await?;

        init_database(&pool).await?;
        // Migrations are idempotent.
        init_database(&pool).await?;

        cleanup_database(&pool).await?;
        init_database(&pool).await?;

        Ok(())
    }
}
