pub mod article;
pub mod extract;
pub mod handler;

pub use crate::domain::model::{AlbumItem, AlbumRequest, AlbumResponse, ArticleContent};
pub use crate::domain::ports::{DiagnosticSink, PageFetcher};
pub use crate::utils::error::Result;
