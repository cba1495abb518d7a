//! Repository for the `templates` table.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::template::Template;

const COLUMNS: &str = "id, code, name, version, created_at, updated_at";

/// Read access to the template registry.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Find a template by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a template by its public code (e.g. `template-1`).
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE code = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all templates ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates ORDER BY code");
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }
}
