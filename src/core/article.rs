use crate::config::profile::AlbumSelectors;
use crate::domain::model::ArticleContent;
use scraper::Html;

pub fn extract_article_from_html(body: &str, selectors: &AlbumSelectors) -> ArticleContent {
    let document = Html::parse_document(body);
    extract_article(&document, selectors)
}

/// 找不到正文區塊時回傳空內容，不視為錯誤
pub fn extract_article(document: &Html, selectors: &AlbumSelectors) -> ArticleContent {
    let Some(content) = document.select(&selectors.article_content).next() else {
        return ArticleContent::default();
    };

    // 每個文字節點各自 trim，去掉空白節點後以換行串接
    let content_text = content
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    // 微信圖片延遲載入，真正網址在 data-src
    let images = content
        .select(&selectors.article_image)
        .filter_map(|img| img.value().attr("data-src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect();

    ArticleContent {
        content_text,
        images,
        content_html: content.html(),
    }
}
