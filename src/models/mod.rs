mod listing;
mod outcome;
mod recommendation;
mod subcategory;

pub use listing::*;
pub use outcome::*;
pub use recommendation::*;
pub use subcategory::*;
