pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::NumbersApiClient;
pub use app::server::{router, serve};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{engine::NumberClassifier, fun_fact::FunFactCache};
pub use domain::model::{ClassificationResult, ClassifyResponse, ErrorResult, Property};
pub use utils::error::{InputError, Result, ServiceError};
