use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::From;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommender_email: String,
    pub recommender_name: Option<String>,
    pub recommendation_title: Option<String>,
    pub recommendation_text: Option<String>,
    pub recommendation_image: Option<String>,
    pub listing_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::Recommendation> for Recommendation {
    fn from(recommendation: models::Recommendation) -> Self {
        Self {
            recommender_email: recommendation.recommender_email,
            recommender_name: recommendation.recommender_name,
            recommendation_title: recommendation.recommendation_title,
            recommendation_text: recommendation.recommendation_text,
            recommendation_image: recommendation.recommendation_image,
            listing_id: recommendation.listing_id.to_hex(),
            created_at: recommendation.created_at,
        }
    }
}
