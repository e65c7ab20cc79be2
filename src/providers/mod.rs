//! 元数据源模块
//!
//! 该模块定义了解析器访问在线元数据接口时使用的核心抽象。

use async_trait::async_trait;

use crate::{error::Result, model::platform::Platform};

pub mod oembed;

/// 从在线元数据源获取到的、已经过校验的字段。
///
/// 在线接口通常只提供标题、缩略图和作者，时长与大小仍由解析器估算。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryMetadata {
    /// 标题，保证非空。
    pub title: String,
    /// 缩略图 URL，保证非空。
    pub thumbnail_url: String,
    /// 作者名称。
    pub author: Option<String>,
}

/// 定义了所有在线元数据源需要实现的通用接口。
#[async_trait]
pub trait MetadataSource: Send + Sync {
    ///
    /// 返回元数据源的唯一名称，用于日志和 `MetadataOrigin`。
    ///
    fn name(&self) -> &'static str;

    ///
    /// 根据内容 ID 获取元数据。
    ///
    /// # 参数
    /// * `identifier` - 由提取器得到的内容 ID。
    /// * `platform` - 内容所属的平台。
    ///
    /// # 返回
    /// 成功时返回校验过的 `PrimaryMetadata`。网络失败、状态码异常或必需字段缺失时返回错误，
    /// 解析器会把这些错误统一视为该源不可用。
    ///
    async fn fetch(&self, identifier: &str, platform: Platform) -> Result<PrimaryMetadata>;
}
