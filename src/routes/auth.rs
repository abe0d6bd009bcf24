use crate::configuration::Settings;
use crate::forms;
use crate::services::{ServiceError, TokenService};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use serde_valid::Validate;

fn session_cookie(name: &str, value: String, production: bool) -> Cookie<'static> {
    let same_site = if production {
        SameSite::None
    } else {
        SameSite::Strict
    };

    Cookie::build(name.to_string(), value)
        .http_only(true)
        .path("/")
        .secure(production)
        .same_site(same_site)
        .finish()
}

#[tracing::instrument(name = "Issue token.", skip(tokens, settings))]
pub async fn issue_token_handler(
    form: web::Json<forms::TokenRequest>,
    tokens: web::Data<TokenService>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ServiceError> {
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(errors.to_string()));
    }

    let token = tokens.issue(&form.email)?;
    let cookie = session_cookie(tokens.cookie_name(), token, settings.production);
    tracing::info!("Token issued for {}", form.email);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "success": true })))
}

#[tracing::instrument(name = "Logout.", skip(tokens, settings))]
pub async fn logout_handler(
    tokens: web::Data<TokenService>,
    settings: web::Data<Settings>,
) -> HttpResponse {
    let mut cookie = session_cookie(tokens.cookie_name(), String::new(), settings.production);
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "success": true }))
}
