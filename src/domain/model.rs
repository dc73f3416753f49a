use serde::{Deserialize, Serialize};

/// 單次呼叫的輸入，只在這次請求中存在
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumRequest {
    pub url: Option<String>,
}

impl AlbumRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// 一筆專輯文章；兩個欄位都不可為空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Items(Vec<AlbumItem>),
    Error(ErrorBody),
}

/// 單篇文章的正文與圖片
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub content_text: String,
    pub images: Vec<String>,
    pub content_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumResponse {
    pub status: u16,
    pub cache_control: Option<String>,
    pub body: ResponseBody,
}

impl AlbumResponse {
    pub fn success(items: Vec<AlbumItem>, cache_max_age: u64) -> Self {
        Self {
            status: 200,
            cache_control: Some(format!("s-maxage={}", cache_max_age)),
            body: ResponseBody::Items(items),
        }
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            cache_control: None,
            body: ResponseBody::Error(ErrorBody {
                error: message.into(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn items(&self) -> Option<&[AlbumItem]> {
        match &self.body {
            ResponseBody::Items(items) => Some(items),
            ResponseBody::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Error(body) => Some(&body.error),
            ResponseBody::Items(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// 失敗發生在哪一種請求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AlbumListing,
    ArticleContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub operation: Operation,
    pub url: String,
    pub cause: String,
}
