pub mod engine;
pub mod query;
pub mod state;

pub use crate::domain::model::LookupResult;
pub use crate::domain::ports::{ConfigProvider, LookupSource, PageStore};
pub use crate::utils::error::Result;
