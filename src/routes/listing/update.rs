use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{parse_id, ListingRepository, ServiceError};
use actix_web::{web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Update listing.", skip(repository))]
pub async fn update_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::ListingUpdateForm>,
    repository: web::Data<ListingRepository>,
) -> Result<impl Responder, ServiceError> {
    let id = parse_id(&path.0)?;
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(errors.to_string()));
    }

    let fields: models::ListingFields = form.into_inner().into();
    let outcome = repository.update(id, &fields).await?;

    Ok(JsonResponse::build()
        .set_id(id.to_hex())
        .set_item(outcome)
        .ok("Updated"))
}
