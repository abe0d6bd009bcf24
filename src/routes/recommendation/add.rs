use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::{parse_id, Claims, RecommendationService, ServiceError};
use actix_web::{web, Responder, Result};
use serde_valid::Validate;

/// Appends a recommendation. A token's email names the recommender and
/// overrides any `recommenderEmail` in the body.
#[tracing::instrument(name = "Add recommendation.", skip(claims, recommendations))]
pub async fn add_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::RecommendationForm>,
    claims: Option<web::ReqData<Claims>>,
    recommendations: web::Data<RecommendationService>,
) -> Result<impl Responder, ServiceError> {
    let listing_id = parse_id(&path.0)?;
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(errors.to_string()));
    }

    let mut form = form.into_inner();
    let email = claims
        .map(|claims| claims.email.clone())
        .or_else(|| form.recommender_email.take())
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation("recommender email is required".to_string()))?;

    let recommendation = form.into_model(listing_id, email);
    let outcome = recommendations.add(listing_id, recommendation).await?;

    Ok(JsonResponse::build()
        .set_id(listing_id.to_hex())
        .set_item(outcome)
        .ok("Saved"))
}
