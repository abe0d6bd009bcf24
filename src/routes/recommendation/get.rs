use crate::helpers::JsonResponse;
use crate::services::{RecommendationService, ServiceError};
use crate::views;
use actix_web::{web, Responder, Result};

/// Listings the user recommended, each carrying only that user's entries.
#[tracing::instrument(name = "List recommendations by email.", skip(recommendations))]
pub async fn by_email_handler(
    path: web::Path<(String,)>,
    recommendations: web::Data<RecommendationService>,
) -> Result<impl Responder, ServiceError> {
    let list: Vec<views::Listing> = recommendations
        .list_by_recommender_email(&path.0)
        .await?
        .into_iter()
        .map(views::Listing::from)
        .collect();

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}
