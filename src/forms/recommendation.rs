use crate::models;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationForm {
    /// Only read when the request carries no token.
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub recommender_email: Option<String>,
    #[validate(max_length = 200)]
    pub recommender_name: Option<String>,
    #[validate(max_length = 200)]
    pub recommendation_title: Option<String>,
    #[validate(max_length = 5000)]
    pub recommendation_text: Option<String>,
    pub recommendation_image: Option<String>,
}

impl RecommendationForm {
    /// Builds the embedded record. Any `listingId` in the body is ignored:
    /// the path decides the parent.
    pub fn into_model(
        self,
        listing_id: ObjectId,
        recommender_email: String,
    ) -> models::Recommendation {
        models::Recommendation {
            recommender_email,
            recommender_name: self.recommender_name,
            recommendation_title: self.recommendation_title,
            recommendation_text: self.recommendation_text,
            recommendation_image: self.recommendation_image,
            listing_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveRecommendationQuery {
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommender_email_must_look_like_an_email() {
        let form = RecommendationForm {
            recommender_email: Some("nobody".to_string()),
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn model_points_back_at_path_listing() {
        let form: RecommendationForm = serde_json::from_str(
            r#"{"recommenderEmail": "r@x.com", "recommendationTitle": "Great", "listingId": "ignored"}"#,
        )
        .unwrap();
        assert!(form.validate().is_ok());

        let id = ObjectId::new();
        let model = form.into_model(id, "token@x.com".to_string());
        assert_eq!(id, model.listing_id);
        assert_eq!("token@x.com", model.recommender_email);
        assert_eq!(Some("Great".to_string()), model.recommendation_title);
    }
}
