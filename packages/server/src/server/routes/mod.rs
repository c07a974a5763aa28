// HTTP routes
pub mod health;
pub mod index;
pub mod upload;

pub use health::*;
pub use index::*;
pub use upload::*;
