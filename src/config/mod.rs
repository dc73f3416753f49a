#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod profile;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wechat-album")]
#[command(about = "Fetch WeChat album listings as JSON")]
pub struct CliConfig {
    #[arg(
        long = "url",
        required_unless_present = "articles",
        conflicts_with = "articles",
        help = "Album page URL (repeatable)"
    )]
    pub urls: Vec<String>,

    #[arg(long = "article", help = "Article page URL to fetch content and images from (repeatable)")]
    pub articles: Vec<String>,

    #[arg(long, help = "Optional TOML profile file")]
    pub config: Option<String>,

    #[arg(long, help = "Keep only the first N entries of each album")]
    pub limit: Option<usize>,

    #[arg(long, help = "Write JSON to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 目標網址（專輯或文章），重複的只保留第一次出現
    pub fn targets(&self) -> Vec<String> {
        let urls = if self.articles.is_empty() {
            &self.urls
        } else {
            &self.articles
        };
        cli::unique_urls(urls)
    }

    /// 有指定設定檔就載入，否則使用預設的 WeChat 設定
    pub fn profile(&self) -> crate::utils::error::Result<profile::AlbumProfile> {
        match &self.config {
            Some(path) => Ok(toml_config::TomlConfig::from_file(path)?.into_profile()),
            None => Ok(profile::AlbumProfile::default()),
        }
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        if self.urls.is_empty() && self.articles.is_empty() {
            return Err(crate::utils::error::AlbumError::MissingConfigError {
                field: "url".to_string(),
            });
        }
        if let Some(limit) = self.limit {
            validate_range("limit", limit, 1, usize::MAX)?;
        }
        if let Some(output) = &self.output {
            validate_non_empty_string("output", output)?;
        }
        if let Some(path) = &self.config {
            validate_non_empty_string("config", path)?;
        }

        Ok(())
    }
}
