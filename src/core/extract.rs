use crate::config::profile::AlbumSelectors;
use crate::domain::model::AlbumItem;
use scraper::{ElementRef, Html};

/// 解析 HTML 並擷取所有專輯項目；`Html` 不跨越 await，只在此函式內存在
pub fn extract_from_html(
    body: &str,
    selectors: &AlbumSelectors,
    base_origin: &str,
) -> Vec<AlbumItem> {
    let document = Html::parse_document(body);
    extract_items(&document, selectors, base_origin)
}

/// 依文件順序輸出，缺標題或連結的項目直接略過
pub fn extract_items(
    document: &Html,
    selectors: &AlbumSelectors,
    base_origin: &str,
) -> Vec<AlbumItem> {
    document
        .select(&selectors.entry)
        .filter_map(|entry| extract_item(entry, selectors, base_origin))
        .collect()
}

fn extract_item(
    entry: ElementRef<'_>,
    selectors: &AlbumSelectors,
    base_origin: &str,
) -> Option<AlbumItem> {
    let title = entry
        .select(&selectors.title)
        .flat_map(|node| node.text())
        .collect::<String>();
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let href = entry
        .select(&selectors.link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .filter(|href| !href.is_empty())?;

    Some(AlbumItem {
        title: title.to_string(),
        url: resolve_href(href, base_origin),
    })
}

/// 以 `http` 開頭視為絕對網址，其餘直接接在 origin 後面
pub fn resolve_href(href: &str, base_origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", base_origin, href)
    }
}
