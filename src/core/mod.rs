pub mod atlas;
pub mod loader;
pub mod selector;

pub use crate::domain::model::{Location, Roll};
pub use crate::domain::ports::LocationSource;
pub use crate::utils::error::Result;
