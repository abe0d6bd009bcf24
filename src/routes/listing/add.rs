use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{Claims, ListingRepository, ServiceError};
use actix_web::{web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add listing.", skip(claims, repository))]
pub async fn add_handler(
    claims: Option<web::ReqData<Claims>>,
    form: web::Json<forms::ListingForm>,
    repository: web::Data<ListingRepository>,
) -> Result<impl Responder, ServiceError> {
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(errors.to_string()));
    }

    if let Some(claims) = claims {
        tracing::debug!("Listing submitted by {}", claims.email);
    }

    let fields: models::ListingFields = form.into_inner().into();
    let outcome = repository.create(fields).await?;

    Ok(JsonResponse::build()
        .set_id(outcome.inserted_id.to_hex())
        .set_item(outcome)
        .ok("Saved"))
}
