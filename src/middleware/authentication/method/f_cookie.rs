use crate::services::{AuthError, Claims, TokenService};
use actix_web::{dev::ServiceRequest, HttpMessage};

#[tracing::instrument(name = "Authenticate with cookie", skip_all)]
pub fn try_cookie(req: &ServiceRequest, tokens: &TokenService) -> Result<Claims, AuthError> {
    let cookie = req.cookie(tokens.cookie_name());
    let claims = tokens.verify(cookie.as_ref().map(|cookie| cookie.value()))?;

    tracing::debug!("Token cookie accepted for {}", claims.email);
    Ok(claims)
}
