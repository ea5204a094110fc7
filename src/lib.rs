pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::PokeApiClient, snapshot::LocalSnapshot};
pub use app::{session::Session, theme::Theme};
pub use config::toml_config::TomlConfig;
pub use core::engine::{LookupEngine, SearchOutcome, UiEvent};
pub use utils::error::{LookupError, Result};
