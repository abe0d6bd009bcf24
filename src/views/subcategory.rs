use crate::models;
use serde::{Deserialize, Serialize};
use std::convert::From;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub subcategory_name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl From<models::Subcategory> for Subcategory {
    fn from(subcategory: models::Subcategory) -> Self {
        Self {
            id: subcategory.id.map(|id| id.to_hex()).unwrap_or_default(),
            subcategory_name: subcategory.subcategory_name,
            image: subcategory.image,
            description: subcategory.description,
        }
    }
}
