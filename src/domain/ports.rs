use crate::domain::model::Diagnostic;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 取得遠端頁面的原始 HTML
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// 失敗原因只寫到這裡，不回傳給呼叫端
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &Diagnostic);
}
