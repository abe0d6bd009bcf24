use crate::db::{ListingFilter, ListingSort, ListingStore};
use crate::models::{DeleteOutcome, InsertOutcome, Listing, ListingFields, UpdateOutcome};
use crate::services::ServiceError;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use std::sync::Arc;

/// What `update` does when no listing has the given id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissing {
    /// Upsert: a new document with the given id and only the supplied fields.
    #[default]
    CreateWithGivenFields,
    Fail,
}

#[derive(Clone)]
pub struct ListingRepository {
    store: Arc<dyn ListingStore>,
    on_missing: OnMissing,
}

impl ListingRepository {
    pub fn new(store: Arc<dyn ListingStore>, on_missing: OnMissing) -> Self {
        Self { store, on_missing }
    }

    #[tracing::instrument(name = "List listings.", skip(self))]
    pub async fn list(
        &self,
        search: Option<&str>,
        sort: ListingSort,
    ) -> Result<Vec<Listing>, ServiceError> {
        let filter = search.map(ListingFilter::search).unwrap_or_default();
        Ok(self.store.find_listings(&filter, sort).await?)
    }

    #[tracing::instrument(name = "Get listing.", skip(self))]
    pub async fn get_by_id(&self, id: ObjectId) -> Result<Listing, ServiceError> {
        self.store
            .find_listing(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("listing {id}")))
    }

    #[tracing::instrument(name = "List listings of an owner.", skip(self))]
    pub async fn list_by_owner_email(&self, email: &str) -> Result<Vec<Listing>, ServiceError> {
        Ok(self
            .store
            .find_listings(&ListingFilter::owner(email), ListingSort::Recent)
            .await?)
    }

    #[tracing::instrument(name = "Create listing.", skip(self, fields))]
    pub async fn create(&self, fields: ListingFields) -> Result<InsertOutcome, ServiceError> {
        let listing = Listing {
            id: None,
            fields,
            recommendations: Vec::new(),
        };

        let outcome = self.store.insert_listing(listing).await?;
        tracing::info!("New listing {} has been saved", outcome.inserted_id);
        Ok(outcome)
    }

    /// Updates with the configured `OnMissing` policy.
    pub async fn update(
        &self,
        id: ObjectId,
        fields: &ListingFields,
    ) -> Result<UpdateOutcome, ServiceError> {
        self.update_with(id, fields, self.on_missing).await
    }

    #[tracing::instrument(name = "Update listing.", skip(self, fields))]
    pub async fn update_with(
        &self,
        id: ObjectId,
        fields: &ListingFields,
        on_missing: OnMissing,
    ) -> Result<UpdateOutcome, ServiceError> {
        if fields.content().is_empty() {
            return Err(ServiceError::Validation("no fields to update".to_string()));
        }

        let upsert = on_missing == OnMissing::CreateWithGivenFields;
        let outcome = self.store.update_listing(id, fields, upsert).await?;

        if let Some(upserted_id) = outcome.upserted_id {
            tracing::warn!("Listing {} did not exist and was created by update", upserted_id);
        } else if outcome.matched_count == 0 {
            return Err(ServiceError::NotFound(format!("listing {id}")));
        }

        Ok(outcome)
    }

    #[tracing::instrument(name = "Delete listing.", skip(self))]
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        Ok(self.store.delete_listing(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    fn repository(on_missing: OnMissing) -> ListingRepository {
        ListingRepository::new(Arc::new(InMemoryStore::new()), on_missing)
    }

    fn fields(item_name: &str, user_email: &str) -> ListingFields {
        ListingFields {
            item_name: Some(item_name.to_string()),
            user_email: Some(user_email.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn created_listing_is_listed_without_recommendations() {
        let listings = repository(OnMissing::default());
        let outcome = listings.create(fields("Clay Vase", "potter@x.com")).await.unwrap();

        let all = listings.list(None, ListingSort::Recent).await.unwrap();
        let created = all
            .iter()
            .find(|listing| listing.id == Some(outcome.inserted_id))
            .expect("created listing is listed");
        assert!(created.recommendations.is_empty());
        assert_eq!(Some("Clay Vase"), created.fields.item_name.as_deref());
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_not_found() {
        let listings = repository(OnMissing::default());
        let result = listings.get_by_id(ObjectId::new()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_item_and_brand() {
        let listings = repository(OnMissing::default());
        listings.create(fields("Woven Basket", "a@x.com")).await.unwrap();
        let mut brand = fields("Tote", "b@x.com");
        brand.brand_name = Some("BasketCo".to_string());
        listings.create(brand).await.unwrap();
        listings.create(fields("Candle", "c@x.com")).await.unwrap();

        let found = listings.list(Some("BASKET"), ListingSort::Oldest).await.unwrap();
        let names: Vec<_> = found
            .iter()
            .filter_map(|listing| listing.fields.item_name.as_deref())
            .collect();
        assert_eq!(vec!["Woven Basket", "Tote"], names);
    }

    #[tokio::test]
    async fn owner_listings_are_most_recent_first() {
        let listings = repository(OnMissing::default());
        listings.create(fields("Old", "owner@x.com")).await.unwrap();
        listings.create(fields("Other", "someone@x.com")).await.unwrap();
        listings.create(fields("New", "owner@x.com")).await.unwrap();

        let owned = listings.list_by_owner_email("owner@x.com").await.unwrap();
        let names: Vec<_> = owned
            .iter()
            .filter_map(|listing| listing.fields.item_name.as_deref())
            .collect();
        assert_eq!(vec!["New", "Old"], names);
    }

    #[tokio::test]
    async fn update_of_missing_id_creates_document_with_exactly_given_fields() {
        let listings = repository(OnMissing::CreateWithGivenFields);
        let id = ObjectId::new();
        let patch = ListingFields {
            price: Some(19.99),
            stock_status: Some("In stock".to_string()),
            ..Default::default()
        };

        let outcome = listings.update(id, &patch).await.unwrap();
        assert_eq!(Some(id), outcome.upserted_id);
        assert_eq!(0, outcome.matched_count);

        let created = listings.get_by_id(id).await.unwrap();
        assert_eq!(patch, created.fields);
        assert!(created.recommendations.is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_id_fails_when_configured() {
        let listings = repository(OnMissing::Fail);
        let id = ObjectId::new();
        let patch = ListingFields {
            price: Some(1.0),
            ..Default::default()
        };

        let result = listings.update(id, &patch).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            listings.get_by_id(id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_replaces_content_and_keeps_poster() {
        let listings = repository(OnMissing::default());
        let mut original = fields("Scarf", "knit@x.com");
        original.short_description = Some("wool".to_string());
        let id = listings.create(original).await.unwrap().inserted_id;

        let replacement = ListingFields {
            price: Some(25.0),
            ..Default::default()
        };
        let outcome = listings.update(id, &replacement).await.unwrap();
        assert_eq!((1, 1, None), (outcome.matched_count, outcome.modified_count, outcome.upserted_id));

        let updated = listings.get_by_id(id).await.unwrap();
        assert_eq!(None, updated.fields.item_name);
        assert_eq!(None, updated.fields.short_description);
        assert_eq!(Some(25.0), updated.fields.price);
        assert_eq!(Some("knit@x.com"), updated.fields.user_email.as_deref());
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let listings = repository(OnMissing::default());
        let result = listings.update(ObjectId::new(), &ListingFields::default()).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let poster_only = ListingFields {
            user_email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let result = listings.update(ObjectId::new(), &poster_only).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_reports_count() {
        let listings = repository(OnMissing::default());
        let id = listings
            .create(fields("Mug", "clay@x.com"))
            .await
            .unwrap()
            .inserted_id;

        assert_eq!(1, listings.delete(id).await.unwrap().deleted_count);
        assert_eq!(0, listings.delete(id).await.unwrap().deleted_count);
        assert!(matches!(
            listings.get_by_id(id).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
