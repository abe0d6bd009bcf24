use crate::db::ListingStore;
use crate::models::Subcategory;
use crate::services::ServiceError;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

#[derive(Clone)]
pub struct SubcategoryRepository {
    store: Arc<dyn ListingStore>,
}

impl SubcategoryRepository {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "List subcategories.", skip(self))]
    pub async fn list(&self) -> Result<Vec<Subcategory>, ServiceError> {
        Ok(self.store.list_subcategories().await?)
    }

    #[tracing::instrument(name = "Get subcategory.", skip(self))]
    pub async fn get_by_id(&self, id: ObjectId) -> Result<Subcategory, ServiceError> {
        self.store
            .find_subcategory(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("subcategory {id}")))
    }
}
