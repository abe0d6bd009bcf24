pub mod add;
pub mod delete;
pub mod get;
pub mod update;

pub use add::*;
pub use delete::*;
pub use get::*;
pub use update::*;
