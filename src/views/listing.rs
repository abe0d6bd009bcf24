use crate::models;
use crate::views::Recommendation;
use serde::{Deserialize, Serialize};
use std::convert::From;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String, // hex ObjectId
    #[serde(flatten)]
    pub fields: models::ListingFields,
    pub recommendations: Vec<Recommendation>,
}

impl From<models::Listing> for Listing {
    fn from(listing: models::Listing) -> Self {
        Self {
            id: listing.id.map(|id| id.to_hex()).unwrap_or_default(),
            fields: listing.fields,
            recommendations: listing
                .recommendations
                .into_iter()
                .map(Recommendation::from)
                .collect(),
        }
    }
}
