mod listing;
mod recommendation;
mod subcategory;

pub use listing::Listing;
pub use recommendation::Recommendation;
pub use subcategory::Subcategory;
