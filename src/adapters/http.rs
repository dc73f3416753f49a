use crate::domain::ports::PageFetcher;
use crate::utils::error::{AlbumError, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;

/// reqwest 實作；逾時與重新導向沿用 reqwest 預設值
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    user_agent: String,
}

impl ReqwestFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self::with_client(Client::new(), user_agent)
    }

    pub fn with_client(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching album page: {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Album page response status: {}", status);
        if !status.is_success() {
            return Err(AlbumError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/mp/appmsgalbum")
                .header("User-Agent", "Mozilla/5.0");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body("<html><body>ok</body></html>");
        });

        let fetcher = ReqwestFetcher::new("Mozilla/5.0");
        let body = fetcher
            .fetch_page(&server.url("/mp/appmsgalbum"))
            .await
            .unwrap();

        page_mock.assert();
        assert!(body.contains("ok"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/mp/appmsgalbum");
            then.status(503);
        });

        let fetcher = ReqwestFetcher::new("Mozilla/5.0");
        let result = fetcher.fetch_page(&server.url("/mp/appmsgalbum")).await;

        page_mock.assert();
        assert!(matches!(
            result,
            Err(AlbumError::UpstreamStatus { status: 503, .. })
        ));
    }
}
