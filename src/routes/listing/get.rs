use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::{parse_id, ListingRepository, ServiceError};
use crate::views;
use actix_web::{web, Responder, Result};

#[tracing::instrument(name = "List listings.", skip(repository))]
pub async fn list_handler(
    query: web::Query<forms::ListingQuery>,
    repository: web::Data<ListingRepository>,
) -> Result<impl Responder, ServiceError> {
    let list: Vec<views::Listing> = repository
        .list(query.search.as_deref(), query.sort)
        .await?
        .into_iter()
        .map(views::Listing::from)
        .collect();

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}

#[tracing::instrument(name = "Get listing.", skip(repository))]
pub async fn item_handler(
    path: web::Path<(String,)>,
    repository: web::Data<ListingRepository>,
) -> Result<impl Responder, ServiceError> {
    let id = parse_id(&path.0)?;
    let listing = repository.get_by_id(id).await?;

    Ok(JsonResponse::build()
        .set_id(id.to_hex())
        .set_item(views::Listing::from(listing))
        .ok("OK"))
}

#[tracing::instrument(name = "List listings of an owner.", skip(repository))]
pub async fn owner_list_handler(
    path: web::Path<(String,)>,
    repository: web::Data<ListingRepository>,
) -> Result<impl Responder, ServiceError> {
    let list: Vec<views::Listing> = repository
        .list_by_owner_email(&path.0)
        .await?
        .into_iter()
        .map(views::Listing::from)
        .collect();

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}
