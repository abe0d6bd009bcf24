use crate::helpers::JsonResponse;
use crate::services::{parse_id, ServiceError, SubcategoryRepository};
use crate::views;
use actix_web::{web, Responder, Result};

#[tracing::instrument(name = "List subcategories.", skip(repository))]
pub async fn list_handler(
    repository: web::Data<SubcategoryRepository>,
) -> Result<impl Responder, ServiceError> {
    let list: Vec<views::Subcategory> = repository
        .list()
        .await?
        .into_iter()
        .map(views::Subcategory::from)
        .collect();

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}

#[tracing::instrument(name = "Get subcategory.", skip(repository))]
pub async fn item_handler(
    path: web::Path<(String,)>,
    repository: web::Data<SubcategoryRepository>,
) -> Result<impl Responder, ServiceError> {
    let id = parse_id(&path.0)?;
    let item = repository.get_by_id(id).await?;

    Ok(JsonResponse::build()
        .set_id(id.to_hex())
        .set_item(views::Subcategory::from(item))
        .ok("OK"))
}
