use crate::models::{
    DeleteOutcome, InsertOutcome, Listing, ListingFields, Recommendation, Subcategory,
    UpdateOutcome,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use thiserror::Error;

pub mod memory;
pub mod mongo;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
    #[error("failed to encode document: {0}")]
    Encoding(#[from] mongodb::bson::ser::Error),
    #[error("unexpected store response: {0}")]
    Unexpected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Conditions combined with AND. An empty filter matches every listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Case-insensitive substring of item name or brand name.
    pub search: Option<String>,
    pub owner_email: Option<String>,
    /// Listings holding at least one recommendation by this email.
    pub recommender_email: Option<String>,
}

impl ListingFilter {
    pub fn search(text: impl Into<String>) -> Self {
        let text = text.into().trim().to_string();
        Self {
            search: (!text.is_empty()).then_some(text),
            ..Default::default()
        }
    }

    pub fn owner(email: impl Into<String>) -> Self {
        Self {
            owner_email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn recommender(email: impl Into<String>) -> Self {
        Self {
            recommender_email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let search = self
            .search
            .as_deref()
            .map_or(true, |search| listing.contains(search));
        let owner = self
            .owner_email
            .as_deref()
            .map_or(true, |email| listing.fields.user_email.as_deref() == Some(email));
        let recommender = self.recommender_email.as_deref().map_or(true, |email| {
            listing
                .recommendations
                .iter()
                .any(|recommendation| recommendation.recommender_email == email)
        });

        search && owner && recommender
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingSort {
    /// Most recently inserted first.
    #[default]
    Recent,
    Oldest,
    DeadlineAsc,
    DeadlineDesc,
}

/// Document-store operations the repositories are built on. Every mutation
/// touches a single document and is applied atomically by the backend.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    async fn insert_listing(&self, listing: Listing) -> StoreResult<InsertOutcome>;
    async fn find_listings(
        &self,
        filter: &ListingFilter,
        sort: ListingSort,
    ) -> StoreResult<Vec<Listing>>;
    async fn find_listing(&self, id: ObjectId) -> StoreResult<Option<Listing>>;
    /// Replaces the listing's content with `fields`; editable fields left out
    /// are cleared, the poster and recommendations are kept. With `upsert` a
    /// missing id creates a document holding exactly the supplied content.
    async fn update_listing(
        &self,
        id: ObjectId,
        fields: &ListingFields,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome>;
    async fn delete_listing(&self, id: ObjectId) -> StoreResult<DeleteOutcome>;

    async fn push_recommendation(
        &self,
        id: ObjectId,
        recommendation: &Recommendation,
    ) -> StoreResult<UpdateOutcome>;
    async fn pull_recommendations(
        &self,
        id: ObjectId,
        recommender_email: &str,
    ) -> StoreResult<UpdateOutcome>;

    async fn list_subcategories(&self) -> StoreResult<Vec<Subcategory>>;
    async fn find_subcategory(&self, id: ObjectId) -> StoreResult<Option<Subcategory>>;

    fn backend_name(&self) -> &'static str;
}
