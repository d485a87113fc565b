use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::items::dto::{EditItemRequest, PostItemRequest};

/// Auction item record. The id is supplied by the caller on creation and the
/// JSON shape keeps the `_id` / camelCase field names clients expect.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: i64,
    pub item_name: String,
    pub description: String,
    pub current_bid: f64,
    pub highest_bidder: String,
    #[serde(with = "time::serde::rfc3339")]
    pub ending_time: OffsetDateTime,
    pub is_closed: bool,
    pub creator: String,
}

impl Item {
    pub async fn list_all(db: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, item_name, description, current_bid, highest_bidder,
                   ending_time, is_closed, creator
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, item_name, description, current_bid, highest_bidder,
                   ending_time, is_closed, creator
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        req: &PostItemRequest,
        creator: &str,
    ) -> Result<Item, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (id, item_name, description, current_bid, highest_bidder,
                               ending_time, is_closed, creator)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, item_name, description, current_bid, highest_bidder,
                      ending_time, is_closed, creator
            "#,
        )
        .bind(req.id)
        .bind(&req.item_name)
        .bind(&req.description)
        .bind(req.current_bid)
        .bind(&req.highest_bidder)
        .bind(req.ending_time)
        .bind(req.is_closed)
        .bind(creator)
        .fetch_one(db)
        .await
    }

    /// Full-field replace. Returns None when no item has that id.
    pub async fn replace(
        db: &PgPool,
        id: i64,
        req: &EditItemRequest,
    ) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET item_name = $2, description = $3, current_bid = $4, highest_bidder = $5,
                ending_time = $6, is_closed = $7, creator = $8
            WHERE id = $1
            RETURNING id, item_name, description, current_bid, highest_bidder,
                      ending_time, is_closed, creator
            "#,
        )
        .bind(id)
        .bind(&req.item_name)
        .bind(&req.description)
        .bind(req.current_bid)
        .bind(&req.highest_bidder)
        .bind(req.ending_time)
        .bind(req.is_closed)
        .bind(&req.creator)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            DELETE FROM items
            WHERE id = $1
            RETURNING id, item_name, description, current_bid, highest_bidder,
                      ending_time, is_closed, creator
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Flag an auction closed. Idempotent; the flag never goes back to false
    /// through this path.
    pub async fn close(db: &PgPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE items
            SET is_closed = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Conditional bid write: only lands if the stored bid still equals the
    /// value the caller read and the auction is still open. Returns None when
    /// a concurrent bid got there first.
    pub async fn apply_bid(
        db: &PgPool,
        id: i64,
        bid_amount: f64,
        bidder: &str,
        previous_bid: f64,
    ) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET current_bid = $2, highest_bidder = $3
            WHERE id = $1 AND current_bid = $4 AND NOT is_closed
            RETURNING id, item_name, description, current_bid, highest_bidder,
                      ending_time, is_closed, creator
            "#,
        )
        .bind(id)
        .bind(bid_amount)
        .bind(bidder)
        .bind(previous_bid)
        .fetch_optional(db)
        .await
    }
}
