//! In-memory `ListingStore` for tests and local development.
//!
//! Listings are kept behind a `tokio::sync::RwLock`. Every mutation runs
//! under a single write lock, which gives the same single-document atomicity
//! the driver offers for `$set`, `$push` and `$pull`.
//! Nothing is durable.
use super::{ListingFilter, ListingSort, ListingStore, StoreResult};
use crate::models::{
    DeleteOutcome, InsertOutcome, Listing, ListingFields, Recommendation, Subcategory,
    UpdateOutcome,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    listings: RwLock<Vec<Listing>>,
    subcategories: RwLock<Vec<Subcategory>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_subcategory(&self, mut subcategory: Subcategory) -> ObjectId {
        let id = *subcategory.id.get_or_insert_with(ObjectId::new);
        self.subcategories.write().await.push(subcategory);
        id
    }

    pub async fn listing_count(&self) -> usize {
        self.listings.read().await.len()
    }
}

fn sort_listings(listings: &mut [Listing], sort: ListingSort) {
    // ObjectIds order by their embedded creation time, as `_id` does in the driver
    match sort {
        ListingSort::Recent => listings.sort_by(|a, b| b.id.cmp(&a.id)),
        ListingSort::Oldest => listings.sort_by(|a, b| a.id.cmp(&b.id)),
        // missing deadlines order first ascending, last descending
        ListingSort::DeadlineAsc => listings.sort_by(|a, b| {
            (&a.fields.deadline, a.id).cmp(&(&b.fields.deadline, b.id))
        }),
        ListingSort::DeadlineDesc => listings.sort_by(|a, b| {
            (&b.fields.deadline, b.id).cmp(&(&a.fields.deadline, a.id))
        }),
    }
}

#[async_trait]
impl ListingStore for InMemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert_listing(&self, mut listing: Listing) -> StoreResult<InsertOutcome> {
        let id = *listing.id.get_or_insert_with(ObjectId::new);
        self.listings.write().await.push(listing);
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn find_listings(
        &self,
        filter: &ListingFilter,
        sort: ListingSort,
    ) -> StoreResult<Vec<Listing>> {
        let mut listings: Vec<Listing> = self
            .listings
            .read()
            .await
            .iter()
            .filter(|listing| filter.matches(listing))
            .cloned()
            .collect();
        sort_listings(&mut listings, sort);
        Ok(listings)
    }

    async fn find_listing(&self, id: ObjectId) -> StoreResult<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|listing| listing.id == Some(id)).cloned())
    }

    async fn update_listing(
        &self,
        id: ObjectId,
        fields: &ListingFields,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let mut listings = self.listings.write().await;
        match listings.iter_mut().find(|listing| listing.id == Some(id)) {
            Some(listing) => {
                let before = listing.fields.clone();
                fields.replace_content(&mut listing.fields);
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: u64::from(before != listing.fields),
                    upserted_id: None,
                })
            }
            None if upsert => {
                listings.push(Listing {
                    id: Some(id),
                    fields: fields.content(),
                    recommendations: Vec::new(),
                });
                Ok(UpdateOutcome {
                    upserted_id: Some(id),
                    ..Default::default()
                })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }

    async fn delete_listing(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        let mut listings = self.listings.write().await;
        let before = listings.len();
        listings.retain(|listing| listing.id != Some(id));
        Ok(DeleteOutcome {
            deleted_count: (before - listings.len()) as u64,
        })
    }

    async fn push_recommendation(
        &self,
        id: ObjectId,
        recommendation: &Recommendation,
    ) -> StoreResult<UpdateOutcome> {
        let mut listings = self.listings.write().await;
        match listings.iter_mut().find(|listing| listing.id == Some(id)) {
            Some(listing) => {
                listing.recommendations.push(recommendation.clone());
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: 1,
                    upserted_id: None,
                })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }

    async fn pull_recommendations(
        &self,
        id: ObjectId,
        recommender_email: &str,
    ) -> StoreResult<UpdateOutcome> {
        let mut listings = self.listings.write().await;
        match listings.iter_mut().find(|listing| listing.id == Some(id)) {
            Some(listing) => {
                let before = listing.recommendations.len();
                listing
                    .recommendations
                    .retain(|recommendation| recommendation.recommender_email != recommender_email);
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: u64::from(before != listing.recommendations.len()),
                    upserted_id: None,
                })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }

    async fn list_subcategories(&self) -> StoreResult<Vec<Subcategory>> {
        Ok(self.subcategories.read().await.clone())
    }

    async fn find_subcategory(&self, id: ObjectId) -> StoreResult<Option<Subcategory>> {
        let subcategories = self.subcategories.read().await;
        Ok(subcategories
            .iter()
            .find(|subcategory| subcategory.id == Some(id))
            .cloned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
