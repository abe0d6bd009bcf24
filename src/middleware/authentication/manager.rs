use crate::middleware::authentication::*;
use crate::services::TokenService;

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

/// Wraps a single route and enforces its `Access` requirement.
#[derive(Clone)]
pub struct Manager {
    access: Access,
    tokens: Arc<TokenService>,
}

impl Manager {
    pub fn new(access: Access, tokens: Arc<TokenService>) -> Self {
        Self { access, tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Manager
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ManagerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ManagerMiddleware {
            service: Rc::new(service),
            access: self.access,
            tokens: self.tokens.clone(),
        }))
    }
}
