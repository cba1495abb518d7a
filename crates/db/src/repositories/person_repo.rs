//! Repository for the `invitation_people` table.
//!
//! Every invitation owns exactly one bride row and one groom row; the
//! unique constraint on (invitation_id, role) backs the ensure operation.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::person::{Person, UpdatePersonProfile};

const COLUMNS: &str = "\
    id, invitation_id, role, name, title, father_name, mother_name, \
    instagram_handle, photo_asset_id, created_at, updated_at";

/// Persistence for the bride/groom rows.
pub struct PersonRepo;

impl PersonRepo {
    /// Fetch the person row for a role, creating an empty one on first touch.
    pub async fn ensure(
        pool: &PgPool,
        invitation_id: DbId,
        role: &str,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_people (invitation_id, role) VALUES ($1, $2)
             ON CONFLICT (invitation_id, role)
             DO UPDATE SET role = invitation_people.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(invitation_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Find the person row for a role, if it has been created.
    pub async fn find_by_role(
        pool: &PgPool,
        invitation_id: DbId,
        role: &str,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM invitation_people WHERE invitation_id = $1 AND role = $2");
        sqlx::query_as::<_, Person>(&query)
            .bind(invitation_id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// List both people of an invitation (bride first by role order).
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM invitation_people WHERE invitation_id = $1 ORDER BY role");
        sqlx::query_as::<_, Person>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a person's profile fields from a wizard submission.
    pub async fn update_profile(
        pool: &PgPool,
        invitation_id: DbId,
        role: &str,
        input: &UpdatePersonProfile,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_people SET
                name = $3,
                title = $4,
                father_name = $5,
                mother_name = $6,
                instagram_handle = $7
             WHERE invitation_id = $1 AND role = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(invitation_id)
            .bind(role)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.father_name)
            .bind(&input.mother_name)
            .bind(&input.instagram_handle)
            .fetch_one(pool)
            .await
    }

    /// Point a person at their photo asset.
    pub async fn set_photo_asset(
        pool: &PgPool,
        invitation_id: DbId,
        role: &str,
        asset_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE invitation_people SET photo_asset_id = $3
             WHERE invitation_id = $1 AND role = $2",
        )
        .bind(invitation_id)
        .bind(role)
        .bind(asset_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
