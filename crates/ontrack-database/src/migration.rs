//! Schema migrations for the `todos` table.
//!
//! Migration files live in the workspace `migrations/` directory and are
//! embedded at compile time.

use sqlx::PgPool;
use tracing::info;

use ontrack_core::error::{AppError, ErrorKind};

/// Apply pending migrations. Already-applied versions are skipped, so this
/// is safe to call on every start.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(
        available = migrator.iter().count(),
        "Applying todo schema migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to migrate todo schema: {e}"),
            e,
        )
    })?;

    info!("Todo schema is up to date");
    Ok(())
}
