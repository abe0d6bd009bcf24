use crate::helpers::JsonResponse;
use crate::services::{parse_id, ListingRepository, ServiceError};
use actix_web::{web, Responder, Result};

#[tracing::instrument(name = "Delete listing.", skip(repository))]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    repository: web::Data<ListingRepository>,
) -> Result<impl Responder, ServiceError> {
    let id = parse_id(&path.0)?;
    let outcome = repository.delete(id).await?;

    Ok(JsonResponse::build()
        .set_id(id.to_hex())
        .set_item(outcome)
        .ok("Deleted"))
}
