//! 元数据解析模块
//!
//! 先按优先级依次尝试平台的在线元数据源，再无条件地生成确定性占位数据，最后把两者合并。
//! 对于语法上有效的内容 ID，解析永远不会失败。

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::{
    config::HelperConfig,
    error::{Result, VideoHelperError},
    model::{
        metadata::{MetadataOrigin, MetadataRecord},
        platform::Platform,
    },
    profile,
    providers::{MetadataSource, PrimaryMetadata, oembed::OEmbedClient},
};

pub mod fallback;
pub mod latest;

pub use latest::LatestOnly;

/// 元数据解析器，持有每个平台按优先级排列的在线元数据源。
pub struct Resolver {
    sources: HashMap<Platform, Vec<Box<dyn MetadataSource>>>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::offline()
    }
}

impl Resolver {
    /// 根据配置创建解析器。
    ///
    /// 元数据源链完全取自平台配置表中的 `primary_sources`，顺序即优先级。
    /// 目前只有 YouTube 声明了接口：先尝试官方 oEmbed，再尝试 noembed。
    pub fn new(config: &HelperConfig) -> Result<Self> {
        let mut resolver = Self::offline();
        for p in profile::PROFILES.iter().filter(|p| p.has_primary_endpoint()) {
            let chain = p
                .primary_sources
                .iter()
                .map(|&endpoint| {
                    OEmbedClient::for_endpoint(endpoint, config)
                        .map(|client| Box::new(client) as Box<dyn MetadataSource>)
                })
                .collect::<Result<Vec<_>>>()?;
            resolver = resolver.with_sources(p.platform, chain);
        }
        Ok(resolver)
    }

    /// 创建一个不挂载任何在线元数据源的解析器，所有请求直接走占位数据。
    pub fn offline() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// 替换某个平台的元数据源链。
    pub fn with_sources(
        mut self,
        platform: Platform,
        sources: Vec<Box<dyn MetadataSource>>,
    ) -> Self {
        self.sources.insert(platform, sources);
        self
    }

    /// 按优先级尝试平台的在线元数据源。
    ///
    /// # 返回
    /// 成功时返回提供数据的源名称和数据。任何失败都以 `VideoHelperError::SourceUnavailable` 返回，
    /// 其中携带最后一个失败源的原因。
    pub async fn attempt_primary(
        &self,
        identifier: &str,
        platform: Platform,
    ) -> Result<(&'static str, PrimaryMetadata)> {
        if !profile::profile(platform).has_primary_endpoint() {
            return Err(VideoHelperError::source_unavailable(
                "none",
                format!("{} 没有公开的元数据接口", platform.display_name()),
            ));
        }

        let sources = self.sources.get(&platform).map(Vec::as_slice).unwrap_or_default();
        let mut last_error =
            VideoHelperError::source_unavailable("none", "未配置任何元数据源");

        for source in sources {
            match source.fetch(identifier, platform).await {
                Ok(metadata) => return Ok((source.name(), metadata)),
                Err(e) => {
                    debug!("[Resolver] 元数据源 '{}' 失败: {}", source.name(), e);
                    last_error = match e {
                        e @ VideoHelperError::SourceUnavailable { .. } => e,
                        other => VideoHelperError::source_unavailable(source.name(), other),
                    };
                }
            }
        }

        Err(last_error)
    }

    /// 解析内容 ID 对应的元数据记录。
    ///
    /// 在线数据只覆盖标题、缩略图和作者，时长与大小始终来自确定性估算。
    /// 在线源全部失败时返回纯占位记录，调用方无法感知这一降级。
    pub async fn resolve(&self, identifier: &str, platform: Platform) -> MetadataRecord {
        let primary = self.attempt_primary(identifier, platform).await;
        let synthesized = fallback::synthesize(identifier, platform);

        match primary {
            Ok((source_name, metadata)) => {
                info!(
                    "[Resolver] 已从 '{}' 获取 {} 内容 '{}' 的元数据。",
                    source_name, platform, identifier
                );
                MetadataRecord {
                    title: metadata.title,
                    thumbnail_url: metadata.thumbnail_url,
                    author: metadata.author.or(synthesized.author),
                    origin: MetadataOrigin::Primary(source_name.to_string()),
                    ..synthesized
                }
            }
            Err(e) => {
                warn!(
                    "[Resolver] {} 内容 '{}' 使用占位数据: {}",
                    platform, identifier, e
                );
                synthesized
            }
        }
    }
}
