//! 此模块实现了基于 oEmbed 协议的 `MetadataSource`。
//!
//! YouTube 官方接口与 noembed 都遵循同一种响应格式，所以共用一个客户端，只是端点不同。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::HelperConfig,
    error::{Result, VideoHelperError},
    model::platform::Platform,
    providers::{MetadataSource, PrimaryMetadata},
};

pub mod models;
use models::OEmbedResponse;

/// YouTube 官方 oEmbed 端点。
pub const YOUTUBE_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";
/// noembed.com 端点。
pub const NOEMBED_ENDPOINT: &str = "https://noembed.com/embed";

/// 平台配置表中可以引用的 oEmbed 端点。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OEmbedEndpoint {
    /// YouTube 官方端点，地址取自 `HelperConfig::youtube_oembed_endpoint`。
    YouTube,
    /// noembed.com，地址取自 `HelperConfig::noembed_endpoint`。
    Noembed,
}

/// oEmbed 客户端。
#[derive(Debug, Clone)]
pub struct OEmbedClient {
    name: &'static str,
    endpoint: String,
    http_client: Client,
}

impl OEmbedClient {
    /// 创建一个新的 `OEmbedClient`。
    ///
    /// # 参数
    /// * `name` - 源名称，例如 `"youtube-oembed"`。
    /// * `endpoint` - oEmbed 端点，不含查询参数。
    /// * `config` - 提供超时与 User-Agent。
    pub fn new(
        name: &'static str,
        endpoint: impl Into<String>,
        config: &HelperConfig,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            name,
            endpoint: endpoint.into(),
            http_client,
        })
    }

    /// 按端点种类构造客户端。
    pub fn for_endpoint(endpoint: OEmbedEndpoint, config: &HelperConfig) -> Result<Self> {
        match endpoint {
            OEmbedEndpoint::YouTube => Self::youtube(config),
            OEmbedEndpoint::Noembed => Self::noembed(config),
        }
    }

    /// 使用 YouTube 官方端点的便捷构造函数。
    pub fn youtube(config: &HelperConfig) -> Result<Self> {
        Self::new("youtube-oembed", config.youtube_oembed_endpoint.clone(), config)
    }

    /// 使用 noembed 端点的便捷构造函数。
    pub fn noembed(config: &HelperConfig) -> Result<Self> {
        Self::new("noembed", config.noembed_endpoint.clone(), config)
    }

    async fn fetch_raw(&self, content_url: &str) -> Result<OEmbedResponse> {
        tracing::debug!("[oEmbed] 请求 {}: {}", self.name, content_url);

        let response_text = self
            .http_client
            .get(&self.endpoint)
            .query(&[("url", content_url), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str::<OEmbedResponse>(&response_text)?)
    }
}

/// 校验 oEmbed 响应，标题和缩略图缺失或为空白时视为源不可用。
fn validate(source_name: &str, response: OEmbedResponse) -> Result<PrimaryMetadata> {
    if let Some(error) = response.error {
        return Err(VideoHelperError::source_unavailable(source_name, error));
    }

    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    let title = non_blank(response.title)
        .ok_or_else(|| VideoHelperError::source_unavailable(source_name, "响应缺少 title 字段"))?;
    let thumbnail_url = non_blank(response.thumbnail_url).ok_or_else(|| {
        VideoHelperError::source_unavailable(source_name, "响应缺少 thumbnail_url 字段")
    })?;

    Ok(PrimaryMetadata {
        title,
        thumbnail_url,
        author: non_blank(response.author_name),
    })
}

#[async_trait]
impl MetadataSource for OEmbedClient {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, identifier: &str, platform: Platform) -> Result<PrimaryMetadata> {
        let content_url = platform.canonical_url(identifier);
        let response = self.fetch_raw(&content_url).await?;
        validate(self.name, response)
    }
}
