use crate::middleware::authentication::*;
use crate::services::{ServiceError, TokenService};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    Error, HttpMessage,
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;
use std::sync::Arc;

pub struct ManagerMiddleware<S> {
    pub service: Rc<S>,
    pub access: Access,
    pub tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for ManagerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let access = self.access;
        let tokens = self.tokens.clone();

        async move {
            if access == Access::RequiresAuth {
                let claims = method::try_cookie(&req, &tokens).map_err(ServiceError::from)?;
                req.extensions_mut().insert(claims);
            }

            service.call(req).await
        }
        .boxed_local()
    }
}
