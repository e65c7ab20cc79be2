//! 定义了整个 `video-helper` 库的错误类型 `VideoHelperError`。

use std::io;
use thiserror::Error;

/// `video-helper` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum VideoHelperError {
    /// 通用的 anyhow 错误
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// 链接无法匹配所选平台的任何已知格式。
    ///
    /// 这是用户输入错误，应在发起任何网络请求之前提示给用户。
    #[error("无效的 {platform} 链接格式: '{url}'")]
    InvalidFormat {
        /// 用户提供的原始链接。
        url: String,
        /// 用户选择的平台名称。
        platform: String,
    },

    /// 所选清晰度不在该平台的固定列表中。
    #[error("{platform} 不提供 {quality} 清晰度")]
    UnsupportedQuality {
        /// 平台名称。
        platform: String,
        /// 用户选择的清晰度。
        quality: String,
    },

    /// 不支持的平台标识
    #[error("不支持的平台: '{0}'")]
    UnsupportedPlatform(String),

    /// 元数据源不可用（网络失败、状态码异常或数据缺失）。
    ///
    /// 仅在解析器内部使用，永远不会从 `Resolver::resolve` 返回。
    #[error("元数据源 `{source_name}` 不可用: {reason}")]
    SourceUnavailable {
        /// 出错的元数据源名称。
        source_name: String,
        /// 失败原因。
        reason: String,
    },

    /// 请求已被更新的请求取代
    #[error("请求已被取消")]
    Aborted,

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// `VideoHelperError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, VideoHelperError>;

impl VideoHelperError {
    /// 构造一个 `SourceUnavailable` 错误的便捷方法。
    pub(crate) fn source_unavailable(source_name: &str, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 判断该错误是否属于用户可以自行修正的输入错误。
    pub fn is_user_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. } | Self::UnsupportedQuality { .. }
        )
    }
}

impl From<futures::future::Aborted> for VideoHelperError {
    fn from(_: futures::future::Aborted) -> Self {
        Self::Aborted
    }
}
