use crate::db::ListingSort;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub item_name: String,
    #[validate(max_length = 200)]
    pub brand_name: Option<String>,
    pub image: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    #[validate(minimum = 0.0)]
    pub rating: Option<f64>,
    #[validate(max_length = 5000)]
    pub short_description: Option<String>,
    pub subcategory_name: Option<String>,
    pub customization: Option<String>,
    pub processing_time: Option<String>,
    pub stock_status: Option<String>,
    pub deadline: Option<String>,
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub user_email: String,
    pub user_name: Option<String>,
}

impl From<ListingForm> for models::ListingFields {
    fn from(form: ListingForm) -> Self {
        Self {
            item_name: Some(form.item_name),
            brand_name: form.brand_name,
            image: form.image,
            price: form.price,
            rating: form.rating,
            short_description: form.short_description,
            subcategory_name: form.subcategory_name,
            customization: form.customization,
            processing_time: form.processing_time,
            stock_status: form.stock_status,
            deadline: form.deadline,
            user_email: Some(form.user_email),
            user_name: form.user_name,
        }
    }
}

/// The full content an update writes. The poster is fixed at creation.
#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpdateForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub item_name: Option<String>,
    #[validate(max_length = 200)]
    pub brand_name: Option<String>,
    pub image: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    #[validate(minimum = 0.0)]
    pub rating: Option<f64>,
    #[validate(max_length = 5000)]
    pub short_description: Option<String>,
    pub subcategory_name: Option<String>,
    pub customization: Option<String>,
    pub processing_time: Option<String>,
    pub stock_status: Option<String>,
    pub deadline: Option<String>,
}

impl From<ListingUpdateForm> for models::ListingFields {
    fn from(form: ListingUpdateForm) -> Self {
        Self {
            item_name: form.item_name,
            brand_name: form.brand_name,
            image: form.image,
            price: form.price,
            rating: form.rating,
            short_description: form.short_description,
            subcategory_name: form.subcategory_name,
            customization: form.customization,
            processing_time: form.processing_time,
            stock_status: form.stock_status,
            deadline: form.deadline,
            user_email: None,
            user_name: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ListingSort,
}
