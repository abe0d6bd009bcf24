use crate::models::Recommendation;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Content of a listing. Every field is optional: an upsert may leave a
/// document holding only the fields the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>, // ISO date, sortable as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>, // poster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl ListingFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Everything but the poster, who is fixed at creation.
    pub fn content(&self) -> ListingFields {
        ListingFields {
            user_email: None,
            user_name: None,
            ..self.clone()
        }
    }

    /// Replaces the content of `target`: supplied fields are written, the
    /// other editable fields are cleared. The poster is kept.
    pub fn replace_content(&self, target: &mut ListingFields) {
        let user_email = target.user_email.take();
        let user_name = target.user_name.take();
        *target = ListingFields {
            user_email,
            user_name,
            ..self.content()
        };
    }
}

/// Wire names of the fields an update rewrites.
pub const EDITABLE_FIELDS: &[&str] = &[
    "itemName",
    "brandName",
    "image",
    "price",
    "rating",
    "shortDescription",
    "subcategoryName",
    "customization",
    "processingTime",
    "stockStatus",
    "deadline",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: ListingFields,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Listing {
    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.fields.item_name, &self.fields.brand_name]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_clears_unsent_content_and_keeps_poster() {
        let mut target = ListingFields {
            item_name: Some("Clay vase".to_string()),
            short_description: Some("old".to_string()),
            price: Some(12.0),
            user_email: Some("potter@x.com".to_string()),
            user_name: Some("Potter".to_string()),
            ..Default::default()
        };
        let replacement = ListingFields {
            price: Some(15.5),
            user_email: Some("thief@x.com".to_string()),
            ..Default::default()
        };

        replacement.replace_content(&mut target);

        assert_eq!(
            ListingFields {
                price: Some(15.5),
                user_email: Some("potter@x.com".to_string()),
                user_name: Some("Potter".to_string()),
                ..Default::default()
            },
            target
        );
    }

    #[test]
    fn editable_fields_cover_every_content_field() {
        let full = ListingFields {
            item_name: Some(String::new()),
            brand_name: Some(String::new()),
            image: Some(String::new()),
            price: Some(0.0),
            rating: Some(0.0),
            short_description: Some(String::new()),
            subcategory_name: Some(String::new()),
            customization: Some(String::new()),
            processing_time: Some(String::new()),
            stock_status: Some(String::new()),
            deadline: Some(String::new()),
            user_email: Some(String::new()),
            user_name: Some(String::new()),
        };

        let json = serde_json::to_value(full.content()).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let mut editable = EDITABLE_FIELDS.to_vec();
        keys.sort_unstable();
        editable.sort_unstable();
        assert_eq!(editable, keys);
    }

    #[test]
    fn missing_recommendations_decode_as_empty() {
        let listing: Listing = serde_json::from_str(r#"{"itemName": "Quilt"}"#).unwrap();
        assert_eq!(Some("Quilt".to_string()), listing.fields.item_name);
        assert!(listing.recommendations.is_empty());
    }

    #[test]
    fn contains_matches_item_or_brand_ignoring_case() {
        let listing = Listing {
            fields: ListingFields {
                item_name: Some("Woven Basket".to_string()),
                brand_name: Some("RiverReed".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(listing.contains("basket"));
        assert!(listing.contains("REED"));
        assert!(!listing.contains("pottery"));
    }
}
