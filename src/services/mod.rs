mod errors;
pub mod listings;
pub mod recommendations;
pub mod subcategories;
pub mod token;

pub use errors::ServiceError;
pub use listings::{ListingRepository, OnMissing};
pub use recommendations::RecommendationService;
pub use subcategories::SubcategoryRepository;
pub use token::{AuthError, Claims, TokenService};

use mongodb::bson::oid::ObjectId;

/// Parses a path id, rejecting anything that is not a 24-hex ObjectId.
pub fn parse_id(raw: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| ServiceError::Validation(format!("malformed id {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_hex_object_ids() {
        let id = ObjectId::new();
        assert_eq!(id, parse_id(&id.to_hex()).unwrap());
    }

    #[test]
    fn parse_id_rejects_malformed_input() {
        for raw in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "not-an-id"] {
            assert!(matches!(parse_id(raw), Err(ServiceError::Validation(_))));
        }
    }
}
