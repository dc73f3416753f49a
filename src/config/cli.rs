use crate::domain::model::{AlbumResponse, ArticleContent};
use crate::utils::error::{AlbumError, Result};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// 保留第一次出現的順序
pub fn unique_urls(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    urls.iter()
        .filter(|url| {
            let first = seen.insert(url.as_str());
            if !first {
                tracing::warn!("Skipping duplicate URL: {}", url);
            }
            first
        })
        .cloned()
        .collect()
}

/// 單一專輯直接輸出回應內容；多個專輯以 URL 為 key 組成物件
pub fn render_responses(
    responses: &[(String, AlbumResponse)],
    limit: Option<usize>,
    pretty: bool,
) -> Result<String> {
    let mut entries = Vec::with_capacity(responses.len());
    for (url, response) in responses {
        let mut body = serde_json::to_value(&response.body)?;
        if let (Some(limit), Value::Array(items)) = (limit, &mut body) {
            items.truncate(limit);
        }
        entries.push((url.clone(), body));
    }
    render_entries(entries, pretty)
}

pub fn render_articles(
    articles: &[(String, Result<ArticleContent>)],
    pretty: bool,
) -> Result<String> {
    let mut entries = Vec::with_capacity(articles.len());
    for (url, article) in articles {
        let body = match article {
            Ok(content) => serde_json::to_value(content)?,
            Err(e) => json!({ "error": e.public_message() }),
        };
        entries.push((url.clone(), body));
    }
    render_entries(entries, pretty)
}

fn render_entries(mut entries: Vec<(String, Value)>, pretty: bool) -> Result<String> {
    let value = if entries.len() == 1 {
        entries.remove(0).1
    } else {
        let mut object = Map::with_capacity(entries.len());
        for (url, body) in entries {
            // 同一個 key 寫兩次會蓋掉先前的結果
            if object.contains_key(&url) {
                return Err(AlbumError::InvalidConfigValueError {
                    field: "url".to_string(),
                    value: url,
                    reason: "URL appears more than once".to_string(),
                });
            }
            object.insert(url, body);
        }
        Value::Object(object)
    };

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

pub fn write_output(path: &str, json: &str) -> Result<()> {
    let full_path = Path::new(path);

    if let Some(parent) = full_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(full_path, json)?;
    Ok(())
}
