use super::{ListingFilter, ListingSort, ListingStore, StoreError, StoreResult};
use crate::configuration::DatabaseSettings;
use crate::models::{
    DeleteOutcome, InsertOutcome, Listing, ListingFields, Recommendation, Subcategory,
    UpdateOutcome, EDITABLE_FIELDS,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::options::{ClientOptions, FindOptions, ServerApi, ServerApiVersion, UpdateOptions};
use mongodb::{Client, Collection, Database};
use tracing::Instrument;

/// `ListingStore` over a MongoDB deployment. The driver's client is pooled and
/// safe to share across request handlers; no locking happens here.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    listings: Collection<Listing>,
    subcategories: Collection<Subcategory>,
}

impl MongoStore {
    pub async fn connect(settings: &DatabaseSettings) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(settings.connection_string()).await?;
        options.app_name = Some(settings.app_name.clone());
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        Ok(Self::with_client(&client, settings))
    }

    pub fn with_client(client: &Client, settings: &DatabaseSettings) -> Self {
        let database = client.database(&settings.database_name);
        Self {
            listings: database.collection(&settings.listings_collection),
            subcategories: database.collection(&settings.subcategories_collection),
            database,
        }
    }
}

pub(crate) fn filter_document(filter: &ListingFilter) -> Document {
    let mut document = Document::new();

    if let Some(search) = filter.search.as_deref() {
        let pattern = regex::escape(search);
        document.insert(
            "$or",
            vec![
                doc! { "itemName": { "$regex": pattern.as_str(), "$options": "i" } },
                doc! { "brandName": { "$regex": pattern.as_str(), "$options": "i" } },
            ],
        );
    }
    if let Some(email) = filter.owner_email.as_deref() {
        document.insert("userEmail", email);
    }
    if let Some(email) = filter.recommender_email.as_deref() {
        document.insert("recommendations.recommenderEmail", email);
    }

    document
}

pub(crate) fn sort_document(sort: ListingSort) -> Document {
    match sort {
        ListingSort::Recent => doc! { "_id": -1 },
        ListingSort::Oldest => doc! { "_id": 1 },
        ListingSort::DeadlineAsc => doc! { "deadline": 1, "_id": 1 },
        ListingSort::DeadlineDesc => doc! { "deadline": -1, "_id": -1 },
    }
}

/// `$set` of the supplied content plus `$unset` of the editable fields that
/// were left out. The poster and `recommendations` are not touched.
pub(crate) fn replace_document(fields: &ListingFields) -> StoreResult<Document> {
    let set = bson::to_document(&fields.content())?;
    let unset: Document = EDITABLE_FIELDS
        .iter()
        .filter(|name| !set.contains_key(**name))
        .map(|name| (name.to_string(), Bson::String(String::new())))
        .collect();

    let mut update = doc! { "$set": set };
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }
    Ok(update)
}

fn object_id(value: Bson) -> StoreResult<ObjectId> {
    value
        .as_object_id()
        .ok_or_else(|| StoreError::Unexpected(format!("expected an ObjectId, got {value}")))
}

fn update_outcome(result: mongodb::results::UpdateResult) -> StoreResult<UpdateOutcome> {
    Ok(UpdateOutcome {
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_id: result.upserted_id.map(object_id).transpose()?,
    })
}

#[async_trait]
impl ListingStore for MongoStore {
    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        tracing::info!("Pinged the deployment, connection is alive");
        Ok(())
    }

    async fn insert_listing(&self, listing: Listing) -> StoreResult<InsertOutcome> {
        let query_span = tracing::info_span!("Saving new listing into the database");
        let result = self
            .listings
            .insert_one(&listing, None)
            .instrument(query_span)
            .await?;

        Ok(InsertOutcome {
            inserted_id: object_id(result.inserted_id)?,
        })
    }

    async fn find_listings(
        &self,
        filter: &ListingFilter,
        sort: ListingSort,
    ) -> StoreResult<Vec<Listing>> {
        let query_span = tracing::info_span!("Fetch listings.", ?filter, ?sort);
        let options = FindOptions::builder().sort(sort_document(sort)).build();

        async {
            let cursor = self.listings.find(filter_document(filter), options).await?;
            let listings: Vec<Listing> = cursor.try_collect().await?;
            Ok::<_, StoreError>(listings)
        }
        .instrument(query_span)
        .await
    }

    async fn find_listing(&self, id: ObjectId) -> StoreResult<Option<Listing>> {
        let query_span = tracing::info_span!("Fetch listing by id.", %id);
        Ok(self
            .listings
            .find_one(doc! { "_id": id }, None)
            .instrument(query_span)
            .await?)
    }

    async fn update_listing(
        &self,
        id: ObjectId,
        fields: &ListingFields,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let query_span = tracing::info_span!("Updating listing", %id, upsert);
        let update = replace_document(fields)?;
        let options = UpdateOptions::builder().upsert(upsert).build();

        let result = self
            .listings
            .update_one(doc! { "_id": id }, update, options)
            .instrument(query_span)
            .await?;
        update_outcome(result)
    }

    async fn delete_listing(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        let query_span = tracing::info_span!("Delete listing.", %id);
        let result = self
            .listings
            .delete_one(doc! { "_id": id }, None)
            .instrument(query_span)
            .await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn push_recommendation(
        &self,
        id: ObjectId,
        recommendation: &Recommendation,
    ) -> StoreResult<UpdateOutcome> {
        let query_span = tracing::info_span!("Append recommendation to listing", %id);
        let update = doc! { "$push": { "recommendations": bson::to_bson(recommendation)? } };

        let result = self
            .listings
            .update_one(doc! { "_id": id }, update, None)
            .instrument(query_span)
            .await?;
        update_outcome(result)
    }

    async fn pull_recommendations(
        &self,
        id: ObjectId,
        recommender_email: &str,
    ) -> StoreResult<UpdateOutcome> {
        let query_span = tracing::info_span!("Remove recommendations of a user", %id);
        let update = doc! { "$pull": { "recommendations": { "recommenderEmail": recommender_email } } };

        let result = self
            .listings
            .update_one(doc! { "_id": id }, update, None)
            .instrument(query_span)
            .await?;
        update_outcome(result)
    }

    async fn list_subcategories(&self) -> StoreResult<Vec<Subcategory>> {
        let query_span = tracing::info_span!("Fetch subcategories.");
        async {
            let cursor = self.subcategories.find(None, None).await?;
            let subcategories: Vec<Subcategory> = cursor.try_collect().await?;
            Ok::<_, StoreError>(subcategories)
        }
        .instrument(query_span)
        .await
    }

    async fn find_subcategory(&self, id: ObjectId) -> StoreResult<Option<Subcategory>> {
        let query_span = tracing::info_span!("Fetch subcategory by id.", %id);
        Ok(self
            .subcategories
            .find_one(doc! { "_id": id }, None)
            .instrument(query_span)
            .await?)
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
