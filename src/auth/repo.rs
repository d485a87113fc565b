use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::SignUpRequest;

/// User record in the database. Immutable after sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, city, state, zip, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        req: &SignUpRequest,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, city, state, zip, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, full_name, email, city, state, zip, password_hash, created_at
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.email)
        .bind(&req.city)
        .bind(&req.state)
        .bind(&req.zip)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}
