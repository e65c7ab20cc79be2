#![warn(missing_docs)]

//! # Video Helper RS
//!
//! 一个 Rust 库，用于识别 YouTube、TikTok、Instagram 的内容链接，获取视频元数据预览，并生成下载项。
//!
//! ## 主要功能
//!
//! - **链接解析**: 按平台识别多种历史链接格式，提取平台内唯一的内容 ID。
//! - **元数据解析**: 优先请求公开的 oEmbed 接口；接口不可用时，根据内容 ID 确定性地生成占位数据，
//!   同一个 ID 永远得到同样的结果。
//! - **下载**: 生成本地合成文件或跳转到外部下载站点。本库不做任何真实的媒体提取。
//!
//! ## 预览一个链接
//!
//! ```rust,no_run
//! use video_helper_rs::{Platform, VideoHelper};
//!
//! async {
//!     let helper = VideoHelper::new().unwrap();
//!     match helper.preview("https://youtu.be/dQw4w9WgXcQ", Platform::YouTube).await {
//!         Ok(preview) => println!("{} ({})", preview.metadata.title, preview.metadata.duration),
//!         Err(e) => eprintln!("链接无效: {}", e),
//!     }
//! };
//! ```
//!
//! ## 离线解析
//!
//! ```rust
//! use video_helper_rs::{Platform, extractor, resolver::fallback};
//!
//! let id = extractor::extract("https://www.tiktok.com/@scout2015/video/6718335390845095173", Platform::TikTok).unwrap();
//! let record = fallback::synthesize(&id, Platform::TikTok);
//! assert_eq!(record, fallback::synthesize(&id, Platform::TikTok));
//! ```
pub mod config;
pub mod download;
pub mod error;
pub mod extractor;
pub mod model;
pub mod notify;
pub mod profile;
pub mod providers;
pub mod resolver;

use std::sync::Arc;

use futures::FutureExt;

pub use crate::{
    config::HelperConfig,
    download::{DownloadArtifact, DownloadStrategy},
    error::{Result, VideoHelperError},
    model::{metadata::MetadataRecord, platform::Platform, quality::QualityTier},
};

use crate::{
    notify::{Notifier, TracingNotifier},
    resolver::{LatestOnly, Resolver},
};

// ==========================================================
//  顶层 API
// ==========================================================

/// 一次成功预览的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// 内容所属的平台。
    pub platform: Platform,
    /// 从链接中提取的内容 ID。
    pub identifier: String,
    /// 解析得到的元数据。
    pub metadata: MetadataRecord,
}

/// 顶层客户端，封装了提取器、解析器、下载与通知，为界面层提供统一、简单的接口。
///
/// 这是与本库交互的主要入口点。
pub struct VideoHelper {
    config: HelperConfig,
    resolver: Resolver,
    notifier: Arc<dyn Notifier>,
    latest: LatestOnly,
}

impl VideoHelper {
    /// 使用默认配置创建一个新的 `VideoHelper`。
    pub fn new() -> Result<Self> {
        Self::with_config(HelperConfig::default())
    }

    /// 使用指定配置创建一个新的 `VideoHelper`。
    ///
    /// 只会构建 HTTP 客户端，不会发起任何网络请求。
    pub fn with_config(config: HelperConfig) -> Result<Self> {
        let resolver = Resolver::new(&config)?;
        Ok(Self {
            config,
            resolver,
            notifier: Arc::new(TracingNotifier),
            latest: LatestOnly::new(),
        })
    }

    /// 替换解析器，例如换成离线解析器或自定义的元数据源链。
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// 注入通知实现。
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// 当前使用的配置。
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// 从链接中提取内容 ID，见 [`extractor::extract`]。
    pub fn extract(&self, url: &str, platform: Platform) -> Result<String> {
        extractor::extract(url, platform)
    }

    /// 解析内容 ID 的元数据，见 [`Resolver::resolve`]。永远不会失败。
    pub async fn resolve(&self, identifier: &str, platform: Platform) -> MetadataRecord {
        self.resolver.resolve(identifier, platform).await
    }

    /// 提取链接中的内容 ID 并解析元数据。
    ///
    /// 链接格式无效时会发出错误通知并立即返回，不会发起任何网络请求。
    ///
    /// # 返回
    /// * `Ok(Preview)` - 链接有效。元数据可能来自在线源，也可能是占位数据。
    /// * `Err(VideoHelperError::InvalidFormat)` - 链接无法匹配所选平台。
    pub async fn preview(&self, url: &str, platform: Platform) -> Result<Preview> {
        let identifier = match self.extract(url, platform) {
            Ok(id) => id,
            Err(e) => {
                self.notifier.error(&format!(
                    "请输入有效的 {} 链接",
                    platform.display_name()
                ));
                return Err(e);
            }
        };

        let metadata = self.resolve(&identifier, platform).await;
        self.notifier
            .success(&format!("已获取视频信息: {}", metadata.title));

        Ok(Preview {
            platform,
            identifier,
            metadata,
        })
    }

    /// 与 [`VideoHelper::preview`] 相同，但平台以字符串标识给出（例如 `"youtube"`）。
    ///
    /// 平台标识不受支持时返回 `VideoHelperError::UnsupportedPlatform`，不会发出通知。
    pub async fn preview_tagged(&self, url: &str, platform_tag: &str) -> Result<Preview> {
        let platform = Platform::parse_tag(platform_tag)?;
        self.preview(url, platform).await
    }

    /// 预览链接，并中止之前通过本方法提交、尚未完成的预览。
    ///
    /// 调用本方法的那一刻就完成提交并中止旧请求，与返回的 future 何时被轮询无关。
    /// 被更新的请求取代时返回 `VideoHelperError::Aborted`。
    pub fn preview_latest<'a>(
        &'a self,
        url: &'a str,
        platform: Platform,
    ) -> impl Future<Output = Result<Preview>> + 'a {
        self.latest
            .submit(self.preview(url, platform))
            .map(|r| r.and_then(|preview| preview))
    }

    /// 中止正在进行的 [`VideoHelper::preview_latest`] 请求。
    pub fn cancel_pending(&self) {
        self.latest.cancel();
    }

    /// 按配置中的默认方式生成下载项。
    pub fn download(
        &self,
        identifier: &str,
        platform: Platform,
        quality: QualityTier,
    ) -> Result<DownloadArtifact> {
        self.download_with(identifier, platform, quality, self.config.download_strategy)
    }

    /// 以指定方式生成下载项。
    pub fn download_with(
        &self,
        identifier: &str,
        platform: Platform,
        quality: QualityTier,
        strategy: DownloadStrategy,
    ) -> Result<DownloadArtifact> {
        match download::download(identifier, platform, quality, strategy) {
            Ok(artifact) => {
                let message = match &artifact {
                    DownloadArtifact::Local(blob) => format!("下载已开始: {}", blob.file_name),
                    DownloadArtifact::Redirect { .. } => "正在跳转到下载页面...".to_string(),
                };
                self.notifier.info(&message);
                Ok(artifact)
            }
            Err(e) => {
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }
}
