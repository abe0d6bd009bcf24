mod listing;
mod recommendation;
mod token;

pub use listing::*;
pub use recommendation::*;
pub use token::*;
