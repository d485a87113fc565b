use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    items::{
        bidding,
        dto::{EditItemRequest, PostItemRequest, UpdateBidRequest},
        repo::Item,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/item/:id", get(get_item))
        .route("/post-item", post(post_item))
        .route("/update-bid", put(update_bid))
        .route("/edit-item/:id", put(edit_item))
        .route("/delete-item/:id", delete(delete_item))
}

#[instrument(skip(state))]
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = Item::list_all(&state.db).await?;
    Ok(Json(items))
}

#[instrument(skip(state))]
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = Item::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::ItemNotFound)?;
    Ok(Json(item))
}

#[instrument(skip(state, payload))]
async fn post_item(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<PostItemRequest>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    // The creator is whoever holds the token, never a client-supplied field.
    let item = Item::create(&state.db, &payload, &claims.email).await?;
    info!(item_id = item.id, creator = %item.creator, "item posted");
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state, payload))]
async fn update_bid(
    State(state): State<AppState>,
    Json(payload): Json<UpdateBidRequest>,
) -> Result<Json<Item>, AppError> {
    let (item_id, bid_amount, bidder) =
        match (payload.item_id, payload.bid_amount, payload.highest_bidder) {
            (Some(id), Some(amount), Some(bidder)) => (id, amount, bidder),
            _ => {
                warn!("update-bid missing required fields");
                return Err(AppError::Validation("Missing required fields".into()));
            }
        };

    let item = bidding::place_bid(&state.db, item_id, bid_amount, &bidder).await?;
    Ok(Json(item))
}

#[instrument(skip(state, payload))]
async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EditItemRequest>,
) -> Result<Json<Item>, AppError> {
    let item = Item::replace(&state.db, id, &payload)
        .await?
        .ok_or(AppError::ItemNotFound)?;
    info!(item_id = id, "item edited");
    Ok(Json(item))
}

#[instrument(skip(state))]
async fn delete_item(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = Item::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::ItemNotFound)?;

    if item.creator != claims.email {
        warn!(item_id = id, caller = %claims.email, "delete by non-creator rejected");
        return Err(AppError::Forbidden);
    }

    let deleted = Item::delete(&state.db, id)
        .await?
        .ok_or(AppError::ItemNotFound)?;
    info!(item_id = id, "item deleted");
    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_bid_rejects_missing_fields_before_touching_the_store() {
        let state = AppState::fake();
        let payload = UpdateBidRequest {
            item_id: Some(1),
            bid_amount: None,
            highest_bidder: Some("ada@example.com".into()),
        };
        let err = update_bid(State(state), Json(payload)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
