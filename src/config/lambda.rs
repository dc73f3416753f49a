use crate::config::profile::AlbumProfile;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::{AlbumRequest, AlbumResponse};
use crate::utils::error::{AlbumError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub config_path: Option<String>,
    pub user_agent: Option<String>,
    pub cache_max_age: Option<u64>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let cache_max_age = match env::var("ALBUM_CACHE_MAX_AGE") {
            Ok(value) => Some(value.parse::<u64>().map_err(|e| {
                AlbumError::InvalidConfigValueError {
                    field: "ALBUM_CACHE_MAX_AGE".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            config_path: env::var("ALBUM_CONFIG_PATH").ok(),
            user_agent: env::var("ALBUM_USER_AGENT").ok(),
            cache_max_age,
        })
    }

    /// 環境變數覆寫設定檔內容
    pub fn profile(&self) -> Result<AlbumProfile> {
        let mut profile = match &self.config_path {
            Some(path) => TomlConfig::from_file(path)?.into_profile(),
            None => AlbumProfile::default(),
        };
        if let Some(user_agent) = &self.user_agent {
            profile.user_agent = user_agent.clone();
        }
        if let Some(cache_max_age) = self.cache_max_age {
            profile.cache_max_age = cache_max_age;
        }
        Ok(profile)
    }
}

/// API Gateway proxy 事件中我們用到的部分
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    pub fn into_album_request(self) -> AlbumRequest {
        AlbumRequest {
            url: self
                .query_string_parameters
                .and_then(|mut params| params.remove("url")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    pub fn from_album_response(response: &AlbumResponse) -> Result<Self> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(cache_control) = &response.cache_control {
            headers.insert("Cache-Control".to_string(), cache_control.clone());
        }

        Ok(Self {
            status_code: response.status,
            headers,
            body: response.to_json()?,
            is_base64_encoded: false,
        })
    }
}
