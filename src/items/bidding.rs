use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;

use crate::error::AppError;
use crate::items::repo::Item;

/// What a bid attempt does to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidDecision {
    Accept,
    Closed,
    TooLow,
}

/// Decide a bid against the item state the caller just read. A bid must be
/// strictly greater than the current one; equal bids lose. Once the ending
/// time has passed or the closed flag is set, the auction never reopens.
pub fn evaluate(item: &Item, bid_amount: f64, now: OffsetDateTime) -> BidDecision {
    if item.is_closed || now >= item.ending_time {
        return BidDecision::Closed;
    }
    if bid_amount <= item.current_bid {
        return BidDecision::TooLow;
    }
    BidDecision::Accept
}

/// Run one bid attempt end to end: read, decide, persist. An attempt that
/// observes an expired auction persists the closed flag before failing, so
/// later reads see the terminal state.
pub async fn place_bid(
    db: &PgPool,
    item_id: i64,
    bid_amount: f64,
    bidder: &str,
) -> Result<Item, AppError> {
    let item = Item::find_by_id(db, item_id)
        .await?
        .ok_or(AppError::ItemNotFound)?;

    match evaluate(&item, bid_amount, OffsetDateTime::now_utc()) {
        BidDecision::Closed => {
            if !item.is_closed {
                Item::close(db, item_id).await?;
            }
            Err(AppError::BiddingClosed)
        }
        BidDecision::TooLow => Err(AppError::BidTooLow),
        BidDecision::Accept => {
            // Conditional write keyed on the bid we read above. If a
            // concurrent bid landed in between, zero rows match and this
            // attempt is rejected rather than overwriting a higher bid.
            match Item::apply_bid(db, item_id, bid_amount, bidder, item.current_bid).await? {
                Some(updated) => {
                    info!(item_id, bid_amount, bidder, "bid accepted");
                    Ok(updated)
                }
                None => Err(AppError::BidTooLow),
            }
        }
    }
}
