pub mod finder;

pub use crate::domain::model::{ColorRecord, CompColor, Criteria};
pub use crate::domain::ports::JsonFetcher;
pub use crate::utils::error::Result;
