use serde::Deserialize;
use time::OffsetDateTime;

/// Request body for POST /post-item. The creator is taken from the caller's
/// token, never from the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItemRequest {
    #[serde(rename = "_id")]
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub current_bid: f64,
    #[serde(default)]
    pub highest_bidder: String,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub ending_time: OffsetDateTime,
}

/// Request body for PUT /update-bid. Fields are optional so a missing one
/// surfaces as a 400 presence failure rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct UpdateBidRequest {
    #[serde(rename = "itemID")]
    pub item_id: Option<i64>,
    #[serde(rename = "bidAmount")]
    pub bid_amount: Option<f64>,
    #[serde(rename = "highestBidder")]
    pub highest_bidder: Option<String>,
}

/// Request body for PUT /edit-item/:id, a full-field replace.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditItemRequest {
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub current_bid: f64,
    #[serde(default)]
    pub highest_bidder: String,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub ending_time: OffsetDateTime,
    pub creator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_bid_request_accepts_wire_keys() {
        let req: UpdateBidRequest = serde_json::from_str(
            r#"{"itemID": 1, "bidAmount": 150.0, "highestBidder": "ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(req.item_id, Some(1));
        assert_eq!(req.bid_amount, Some(150.0));
        assert_eq!(req.highest_bidder.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn update_bid_request_tolerates_missing_fields() {
        let req: UpdateBidRequest = serde_json::from_str(r#"{"itemID": 1}"#).unwrap();
        assert_eq!(req.item_id, Some(1));
        assert!(req.bid_amount.is_none());
        assert!(req.highest_bidder.is_none());
    }

    #[test]
    fn post_item_request_defaults_optional_fields() {
        let req: PostItemRequest = serde_json::from_str(
            r#"{
                "_id": 7,
                "itemName": "Grandfather clock",
                "currentBid": 100.0,
                "endingTime": "2030-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(req.id, 7);
        assert_eq!(req.description, "");
        assert_eq!(req.highest_bidder, "");
        assert!(!req.is_closed);
    }
}
