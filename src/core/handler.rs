use crate::adapters::diagnostics::TracingSink;
use crate::adapters::http::ReqwestFetcher;
use crate::config::profile::{AlbumProfile, AlbumSelectors};
use crate::core::article::extract_article_from_html;
use crate::core::extract::extract_from_html;
use crate::domain::model::{
    AlbumItem, AlbumRequest, AlbumResponse, ArticleContent, Diagnostic, Operation,
};
use crate::domain::ports::{DiagnosticSink, PageFetcher};
use crate::utils::error::{AlbumError, Result};
use crate::utils::validation::{validate_album_url, validate_url};

/// 專輯擷取：validate → fetch → parse → respond，每次呼叫最多一次對外請求
pub struct AlbumHandler<F: PageFetcher, D: DiagnosticSink> {
    fetcher: F,
    sink: D,
    profile: AlbumProfile,
    selectors: AlbumSelectors,
}

impl AlbumHandler<ReqwestFetcher, TracingSink> {
    pub fn from_profile(profile: AlbumProfile) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(profile.user_agent.clone());
        Self::new(fetcher, TracingSink, profile)
    }
}

impl<F: PageFetcher, D: DiagnosticSink> AlbumHandler<F, D> {
    pub fn new(fetcher: F, sink: D, profile: AlbumProfile) -> Result<Self> {
        let selectors = profile.compile()?;
        Ok(Self {
            fetcher,
            sink,
            profile,
            selectors,
        })
    }

    pub fn profile(&self) -> &AlbumProfile {
        &self.profile
    }

    pub async fn handle(&self, request: AlbumRequest) -> AlbumResponse {
        let result = self.extract(&request).await;
        self.respond(result)
    }

    /// 與 `handle` 相同流程，但保留錯誤本身；5xx 已寫入診斷
    pub async fn extract(&self, request: &AlbumRequest) -> Result<Vec<AlbumItem>> {
        let url = validate_album_url(request.url.as_deref(), &self.profile.url_marker)
            .inspect_err(|e| tracing::debug!("Rejected album request: {}", e))?;

        let body = self
            .fetcher
            .fetch_page(url)
            .await
            .inspect_err(|e| self.report(Operation::AlbumListing, url, e))?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        let items = extract_from_html(&body, &self.selectors, &self.profile.base_origin);
        tracing::info!("✅ Extracted {} album items", items.len());
        Ok(items)
    }

    pub fn respond(&self, result: Result<Vec<AlbumItem>>) -> AlbumResponse {
        match result {
            Ok(items) => AlbumResponse::success(items, self.profile.cache_max_age),
            Err(err) => AlbumResponse::failure(err.status_code(), err.public_message()),
        }
    }

    /// 取得單篇文章的正文與圖片
    pub async fn fetch_article(&self, url: &str) -> Result<ArticleContent> {
        validate_url("article_url", url).map_err(|_| AlbumError::InvalidRequest {
            url: Some(url.to_string()),
        })?;

        let body = self
            .fetcher
            .fetch_page(url)
            .await
            .inspect_err(|e| self.report(Operation::ArticleContent, url, e))?;

        let article = extract_article_from_html(&body, &self.selectors);
        tracing::info!(
            "✅ Extracted article: {} chars, {} images",
            article.content_text.chars().count(),
            article.images.len()
        );
        Ok(article)
    }

    fn report(&self, operation: Operation, url: &str, err: &AlbumError) {
        self.sink.record(&Diagnostic {
            operation,
            url: url.to_string(),
            cause: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResponseBody;
    use crate::utils::error::{ALBUM_FETCH_FAILED_MESSAGE, INVALID_ALBUM_URL_MESSAGE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const ALBUM_URL: &str =
        "https://mp.weixin.qq.com/mp/appmsgalbum?__biz=MzU5NjU1NjY1Mw==&album_id=3447004682407854082";

    #[derive(Clone)]
    struct StubFetcher {
        body: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl StubFetcher {
        fn ok(body: &str) -> Self {
            Self {
                body: Some(body.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch_page(&self, url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body.clone().ok_or_else(|| AlbumError::UpstreamStatus {
                status: 502,
                url: url.to_string(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        events: Arc<Mutex<Vec<Diagnostic>>>,
    }

    impl DiagnosticSink for MemorySink {
        fn record(&self, event: &Diagnostic) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn handler(fetcher: StubFetcher, sink: MemorySink) -> AlbumHandler<StubFetcher, MemorySink> {
        AlbumHandler::new(fetcher, sink, AlbumProfile::default()).unwrap()
    }

    const PAGE: &str = r#"<html><body><ul>
        <li class="album__item"><div class="album__item-title">Một</div><a class="album__item-link" href="/s/abc">x</a></li>
        <li class="album__item"><div class="album__item-title"></div><a class="album__item-link" href="/s/skip">x</a></li>
        <li class="album__item"><div class="album__item-title">Hai</div><a class="album__item-link" href="https://other.example/x">x</a></li>
    </ul></body></html>"#;

    #[tokio::test]
    async fn test_invalid_urls_never_fetch() {
        let fetcher = StubFetcher::ok(PAGE);
        let sink = MemorySink::default();
        let handler = handler(fetcher.clone(), sink.clone());

        for request in [
            AlbumRequest::default(),
            AlbumRequest::new(""),
            AlbumRequest::new("https://mp.weixin.qq.com/s/abc"),
        ] {
            let response = handler.handle(request).await;
            assert_eq!(response.status, 400);
            assert_eq!(response.error_message(), Some(INVALID_ALBUM_URL_MESSAGE));
            assert!(response.cache_control.is_none());
        }

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
        assert!(sink.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_500_and_recorded_once() {
        let fetcher = StubFetcher::failing();
        let sink = MemorySink::default();
        let handler = handler(fetcher.clone(), sink.clone());

        let response = handler.handle(AlbumRequest::new(ALBUM_URL)).await;

        assert_eq!(response.status, 500);
        assert_eq!(response.error_message(), Some(ALBUM_FETCH_FAILED_MESSAGE));
        assert!(response.cache_control.is_none());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operation, Operation::AlbumListing);
        assert_eq!(events[0].url, ALBUM_URL);
        assert!(events[0].cause.contains("502"));
    }

    #[tokio::test]
    async fn test_success_returns_items_in_order_with_cache_header() {
        let fetcher = StubFetcher::ok(PAGE);
        let handler = handler(fetcher.clone(), MemorySink::default());

        let response = handler.handle(AlbumRequest::new(ALBUM_URL)).await;

        assert_eq!(response.status, 200);
        assert_eq!(response.cache_control.as_deref(), Some("s-maxage=600"));
        assert_eq!(
            response.body,
            ResponseBody::Items(vec![
                AlbumItem {
                    title: "Một".to_string(),
                    url: "https://mp.weixin.qq.com/s/abc".to_string(),
                },
                AlbumItem {
                    title: "Hai".to_string(),
                    url: "https://other.example/x".to_string(),
                },
            ])
        );
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_page_is_success() {
        let handler = handler(StubFetcher::ok("<html></html>"), MemorySink::default());
        let response = handler.handle(AlbumRequest::new(ALBUM_URL)).await;

        assert_eq!(response.status, 200);
        assert_eq!(response.items(), Some(&[][..]));
        assert_eq!(response.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let profile = AlbumProfile {
            link_selector: ":::".to_string(),
            ..AlbumProfile::default()
        };
        let result = AlbumHandler::new(StubFetcher::failing(), MemorySink::default(), profile);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_extract_keeps_error_for_caller() {
        let handler = handler(StubFetcher::ok(PAGE), MemorySink::default());

        let result = handler
            .extract(&AlbumRequest::new("https://example.com/nope"))
            .await;
        let err = result.unwrap_err();
        assert!(matches!(err, AlbumError::InvalidRequest { .. }));
        assert!(err.user_friendly_message().contains("not a supported album page"));

        let response = handler.respond(Err(err));
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_fetch_article_extracts_content() {
        let fetcher = StubFetcher::ok(
            r#"<div id="js_content"><p>正文</p><img data-src="https://mmbiz.qpic.cn/1.png"></div>"#,
        );
        let handler = handler(fetcher.clone(), MemorySink::default());

        let article = handler
            .fetch_article("https://mp.weixin.qq.com/s/abc")
            .await
            .unwrap();

        assert_eq!(article.content_text, "正文");
        assert_eq!(article.images, vec!["https://mmbiz.qpic.cn/1.png".to_string()]);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_article_failure_is_recorded() {
        let fetcher = StubFetcher::failing();
        let sink = MemorySink::default();
        let handler = handler(fetcher.clone(), sink.clone());

        let invalid = handler.fetch_article("not a url").await;
        assert!(matches!(invalid, Err(AlbumError::InvalidRequest { .. })));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);

        let failed = handler.fetch_article("https://mp.weixin.qq.com/s/abc").await;
        assert!(matches!(failed, Err(AlbumError::UpstreamStatus { status: 502, .. })));

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operation, Operation::ArticleContent);
        assert_eq!(events[0].url, "https://mp.weixin.qq.com/s/abc");
    }
}
