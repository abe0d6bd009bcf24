use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::{parse_id, Claims, RecommendationService, ServiceError};
use actix_web::{web, Responder, Result};

/// Removes the caller's recommendations from one listing. The listing
/// itself is left in place.
#[tracing::instrument(name = "Remove recommendation.", skip(claims, recommendations))]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    query: web::Query<forms::RemoveRecommendationQuery>,
    claims: Option<web::ReqData<Claims>>,
    recommendations: web::Data<RecommendationService>,
) -> Result<impl Responder, ServiceError> {
    let listing_id = parse_id(&path.0)?;
    let email = claims
        .map(|claims| claims.email.clone())
        .or_else(|| query.into_inner().email)
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation("recommender email is required".to_string()))?;

    let outcome = recommendations.remove(listing_id, &email).await?;

    Ok(JsonResponse::build()
        .set_id(listing_id.to_hex())
        .set_item(outcome)
        .ok("Deleted"))
}
