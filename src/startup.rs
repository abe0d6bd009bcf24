use crate::configuration::Settings;
use crate::db::ListingStore;
use crate::middleware::authentication::{Access, Manager};
use crate::routes;
use crate::services::{
    ListingRepository, RecommendationService, ServiceError, SubcategoryRepository, TokenService,
};
use actix_cors::Cors;
use actix_web::{dev::Server, http::header, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .supports_credentials()
        .max_age(3600)
}

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ListingStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let tokens = Arc::new(TokenService::from_settings(&settings.auth));
    let access = settings.access;
    let origins = settings.cors.allowed_origins.clone();

    let listings = web::Data::new(ListingRepository::new(
        store.clone(),
        settings.listings.update_on_missing,
    ));
    let recommendations = web::Data::new(RecommendationService::new(store.clone()));
    let subcategories = web::Data::new(SubcategoryRepository::new(store.clone()));
    let store: web::Data<dyn ListingStore> = web::Data::from(store);
    let token_data: web::Data<TokenService> = web::Data::from(tokens.clone());
    let settings = web::Data::new(settings);

    tracing::info!(
        "Routes guarded with {} token cookie, store backend {}",
        tokens.cookie_name(),
        store.backend_name()
    );

    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ServiceError::Validation(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ServiceError::Validation(err.to_string()).into());

    let server = HttpServer::new(move || {
        let guard = |access: Access| Manager::new(access, tokens.clone());

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors(&origins))
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(store.clone())
            .app_data(token_data.clone())
            .app_data(settings.clone())
            .app_data(listings.clone())
            .app_data(recommendations.clone())
            .app_data(subcategories.clone())
            .route("/", web::get().to(routes::banner))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/jwt", web::post().to(routes::auth::issue_token_handler))
            .route("/logout", web::get().to(routes::auth::logout_handler))
            .service(
                web::resource("/listings")
                    .route(
                        web::get()
                            .to(routes::listing::list_handler)
                            .wrap(guard(access.list_listings)),
                    )
                    .route(
                        web::post()
                            .to(routes::listing::add_handler)
                            .wrap(guard(access.create_listing)),
                    ),
            )
            .service(
                web::resource("/listings/owner/{email}").route(
                    web::get()
                        .to(routes::listing::owner_list_handler)
                        .wrap(guard(access.owner_listings)),
                ),
            )
            .service(
                web::resource("/listings/{id}")
                    .route(
                        web::get()
                            .to(routes::listing::item_handler)
                            .wrap(guard(access.get_listing)),
                    )
                    .route(
                        web::put()
                            .to(routes::listing::update_handler)
                            .wrap(guard(access.update_listing)),
                    )
                    .route(
                        web::delete()
                            .to(routes::listing::delete_handler)
                            .wrap(guard(access.delete_listing)),
                    ),
            )
            .service(
                web::resource("/listings/{id}/recommendations").route(
                    web::put()
                        .to(routes::recommendation::add_handler)
                        .wrap(guard(access.add_recommendation)),
                ),
            )
            .service(
                web::resource("/recommendations/by/{email}").route(
                    web::get()
                        .to(routes::recommendation::by_email_handler)
                        .wrap(guard(access.recommendations_by_email)),
                ),
            )
            .service(
                web::resource("/recommendations/{id}").route(
                    web::delete()
                        .to(routes::recommendation::delete_handler)
                        .wrap(guard(access.remove_recommendation)),
                ),
            )
            .service(
                web::resource("/subcategories").route(
                    web::get()
                        .to(routes::subcategory::list_handler)
                        .wrap(guard(access.list_subcategories)),
                ),
            )
            .service(
                web::resource("/subcategories/{id}").route(
                    web::get()
                        .to(routes::subcategory::item_handler)
                        .wrap(guard(access.get_subcategory)),
                ),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
