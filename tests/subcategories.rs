mod common;

use listings::db::InMemoryStore;
use listings::models::Subcategory;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn subcategories_are_listed_and_fetched() {
    let store = Arc::new(InMemoryStore::new());
    let id = store
        .insert_subcategory(Subcategory {
            subcategory_name: Some("Pottery".to_string()),
            ..Default::default()
        })
        .await;
    store
        .insert_subcategory(Subcategory {
            subcategory_name: Some("Weaving".to_string()),
            ..Default::default()
        })
        .await;
    let app = common::spawn_app_with_store(common::test_settings(), store).await;

    let body: Value = app
        .client
        .get(app.url("/subcategories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(2, body["list"].as_array().unwrap().len());

    let body: Value = app
        .client
        .get(app.url(&format!("/subcategories/{}", id.to_hex())))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!("Pottery", body["item"]["subcategoryName"]);
    assert_eq!(id.to_hex(), body["item"]["_id"]);
}

#[tokio::test]
async fn unknown_subcategory_is_not_found() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .get(app.url(&format!("/subcategories/{}", ObjectId::new().to_hex())))
        .send()
        .await
        .unwrap();

    assert_eq!(404, response.status().as_u16());
}
