use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Endorsement embedded in its parent listing's `recommendations` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommender_email: String,
    pub recommender_name: Option<String>,
    pub recommendation_title: Option<String>,
    pub recommendation_text: Option<String>,
    pub recommendation_image: Option<String>,
    pub listing_id: ObjectId, // always the parent's _id
    pub created_at: DateTime<Utc>,
}
