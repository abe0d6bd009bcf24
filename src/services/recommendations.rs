//! Recommendations embedded in their parent listing.
//!
//! The embedded `recommendations` array is the only representation. Appends
//! and removals are single-document atomic updates (`$push` / `$pull`), so a
//! removal never races with a concurrent append from another user, and
//! removing a recommendation never touches the parent document otherwise.
use crate::db::{ListingFilter, ListingSort, ListingStore};
use crate::models::{Listing, Recommendation, UpdateOutcome};
use crate::services::ServiceError;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

#[derive(Clone)]
pub struct RecommendationService {
    store: Arc<dyn ListingStore>,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "Add recommendation.", skip(self, recommendation))]
    pub async fn add(
        &self,
        listing_id: ObjectId,
        mut recommendation: Recommendation,
    ) -> Result<UpdateOutcome, ServiceError> {
        // the back-reference always points at the listing it is stored in
        recommendation.listing_id = listing_id;

        let outcome = self
            .store
            .push_recommendation(listing_id, &recommendation)
            .await?;
        if outcome.matched_count == 0 {
            return Err(ServiceError::NotFound(format!("listing {listing_id}")));
        }

        tracing::info!(
            "Recommendation by {} appended to listing {}",
            recommendation.recommender_email,
            listing_id
        );
        Ok(outcome)
    }

    /// Listings recommended by `email`, each narrowed to that user's entries.
    #[tracing::instrument(name = "List recommendations of a user.", skip(self))]
    pub async fn list_by_recommender_email(
        &self,
        email: &str,
    ) -> Result<Vec<Listing>, ServiceError> {
        let listings = self
            .store
            .find_listings(&ListingFilter::recommender(email), ListingSort::Recent)
            .await?;

        Ok(listings
            .into_iter()
            .map(|mut listing| {
                listing
                    .recommendations
                    .retain(|recommendation| recommendation.recommender_email == email);
                listing
            })
            .filter(|listing| !listing.recommendations.is_empty())
            .collect())
    }

    #[tracing::instrument(name = "Remove recommendations of a user.", skip(self))]
    pub async fn remove(
        &self,
        listing_id: ObjectId,
        recommender_email: &str,
    ) -> Result<UpdateOutcome, ServiceError> {
        if self.store.find_listing(listing_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("listing {listing_id}")));
        }

        let outcome = self
            .store
            .pull_recommendations(listing_id, recommender_email)
            .await?;
        // deleted between the lookup and the pull
        if outcome.matched_count == 0 {
            return Err(ServiceError::NotFound(format!("listing {listing_id}")));
        }

        Ok(outcome)
    }
}
