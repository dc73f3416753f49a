pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::lambda::{GatewayRequest, GatewayResponse, LambdaConfig};
pub use config::profile::AlbumProfile;
pub use crate::core::{extract::extract_items, handler::AlbumHandler};
pub use domain::model::{AlbumItem, AlbumRequest, AlbumResponse, ArticleContent};
pub use utils::error::{AlbumError, Result};
