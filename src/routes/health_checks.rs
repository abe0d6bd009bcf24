use crate::db::ListingStore;
use actix_web::{web, HttpResponse};

pub const BANNER: &str = "Listings server is running";

pub async fn banner() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body(BANNER)
}

#[tracing::instrument(name = "Health check.", skip(store))]
pub async fn health_check(store: web::Data<dyn ListingStore>) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => {
            tracing::error!("{} store is unreachable: {}", store.backend_name(), err);
            HttpResponse::ServiceUnavailable().finish()
        }
    }
}
