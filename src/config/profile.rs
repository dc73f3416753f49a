use crate::utils::error::{AlbumError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use scraper::Selector;
use serde::{Deserialize, Serialize};

pub const DEFAULT_URL_MARKER: &str = "mp.weixin.qq.com/mp/appmsgalbum";
pub const DEFAULT_BASE_ORIGIN: &str = "https://mp.weixin.qq.com";
pub const DEFAULT_ENTRY_SELECTOR: &str = ".album__item";
pub const DEFAULT_TITLE_SELECTOR: &str = ".album__item-title";
pub const DEFAULT_LINK_SELECTOR: &str = "a.album__item-link";
pub const DEFAULT_ARTICLE_CONTENT_SELECTOR: &str = "#js_content";
pub const DEFAULT_ARTICLE_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_CACHE_MAX_AGE: u64 = 600;

/// 來源平台的固定設定：網址標記、HTML 結構與快取時間
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumProfile {
    pub url_marker: String,
    pub base_origin: String,
    pub entry_selector: String,
    pub title_selector: String,
    pub link_selector: String,
    pub article_content_selector: String,
    pub article_image_selector: String,
    pub user_agent: String,
    pub cache_max_age: u64,
}

impl Default for AlbumProfile {
    fn default() -> Self {
        Self {
            url_marker: DEFAULT_URL_MARKER.to_string(),
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            entry_selector: DEFAULT_ENTRY_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            article_content_selector: DEFAULT_ARTICLE_CONTENT_SELECTOR.to_string(),
            article_image_selector: DEFAULT_ARTICLE_IMAGE_SELECTOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
        }
    }
}

impl AlbumProfile {
    pub fn selectors(&self) -> Result<AlbumSelectors> {
        Ok(AlbumSelectors {
            entry: parse_selector(&self.entry_selector)?,
            title: parse_selector(&self.title_selector)?,
            link: parse_selector(&self.link_selector)?,
            article_content: parse_selector(&self.article_content_selector)?,
            article_image: parse_selector(&self.article_image_selector)?,
        })
    }

    /// 檢查欄位並編譯選擇器，handler 建立時只做這一次
    pub fn compile(&self) -> Result<AlbumSelectors> {
        validate_non_empty_string("profile.url_marker", &self.url_marker)?;
        validate_url("profile.base_origin", &self.base_origin)?;
        if self.base_origin.ends_with('/') {
            return Err(AlbumError::InvalidConfigValueError {
                field: "profile.base_origin".to_string(),
                value: self.base_origin.clone(),
                reason: "Base origin must not end with '/'".to_string(),
            });
        }
        validate_non_empty_string("profile.user_agent", &self.user_agent)?;
        validate_range("profile.cache_max_age", self.cache_max_age, 0, 31_536_000)?;
        let selectors = self.selectors()?;

        tracing::debug!("Album profile validation passed");
        Ok(selectors)
    }
}

impl Validate for AlbumProfile {
    fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }
}

/// 預先編譯好的 CSS 選擇器，整個 handler 生命週期共用
#[derive(Debug, Clone)]
pub struct AlbumSelectors {
    pub entry: Selector,
    pub title: Selector,
    pub link: Selector,
    pub article_content: Selector,
    pub article_image: Selector,
}

fn parse_selector(selector: &str) -> Result<Selector> {
    validate_non_empty_string("profile.selector", selector)?;
    Selector::parse(selector).map_err(|e| AlbumError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
