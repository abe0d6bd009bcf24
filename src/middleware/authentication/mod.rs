mod manager;
mod manager_middleware;
pub mod method;

pub use manager::*;
pub use manager_middleware::*;

use serde::Deserialize;

/// Capability a route requires from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    /// A valid token cookie; its `Claims` are attached to the request.
    RequiresAuth,
}
