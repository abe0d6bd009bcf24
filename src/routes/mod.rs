pub mod auth;
pub mod health_checks;
pub mod listing;
pub mod recommendation;
pub mod subcategory;

pub use health_checks::*;
