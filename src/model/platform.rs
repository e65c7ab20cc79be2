//! 定义了受支持的视频平台枚举。

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Result, VideoHelperError};

/// 受支持的视频平台。
///
/// 这是一个封闭的枚举，调用方在解析任何链接之前就需要选定平台。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube，拥有完整的清晰度列表，并提供公开的 oEmbed 接口。
    YouTube,
    /// TikTok
    TikTok,
    /// Instagram
    Instagram,
}

impl Platform {
    /// 根据平台标识字符串（如 `"youtube"`）解析平台。
    ///
    /// # 返回
    /// 如果标识不属于受支持的平台，返回 `VideoHelperError::UnsupportedPlatform`。
    pub fn parse_tag(tag: &str) -> Result<Self> {
        Self::from_str(tag.trim())
            .map_err(|_| VideoHelperError::UnsupportedPlatform(tag.to_string()))
    }

    /// 面向用户展示的平台名称。
    pub fn display_name(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
        }
    }

    /// 根据内容 ID 重新拼出该平台上的标准内容链接。
    pub fn canonical_url(self, identifier: &str) -> String {
        match self {
            Self::YouTube => format!("https://www.youtube.com/watch?v={identifier}"),
            Self::TikTok => {
                if identifier.bytes().all(|b| b.is_ascii_digit()) {
                    format!("https://www.tiktok.com/video/{identifier}")
                } else {
                    format!("https://vm.tiktok.com/{identifier}")
                }
            }
            Self::Instagram => format!("https://www.instagram.com/p/{identifier}/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_tag() {
        assert_eq!(Platform::parse_tag("youtube").unwrap(), Platform::YouTube);
        assert_eq!(Platform::parse_tag("TikTok").unwrap(), Platform::TikTok);
        assert_eq!(
            Platform::parse_tag(" INSTAGRAM ").unwrap(),
            Platform::Instagram
        );

        let err = Platform::parse_tag("vimeo").unwrap_err();
        assert!(matches!(err, VideoHelperError::UnsupportedPlatform(ref t) if t == "vimeo"));
    }

    #[test]
    fn test_display_round_trips_through_tag() {
        for platform in Platform::iter() {
            assert_eq!(Platform::parse_tag(&platform.to_string()).unwrap(), platform);
        }
        assert_eq!(Platform::YouTube.to_string(), "youtube");
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            Platform::YouTube.canonical_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(
            Platform::TikTok.canonical_url("7106594312292453675"),
            "https://www.tiktok.com/video/7106594312292453675"
        );
        assert_eq!(
            Platform::TikTok.canonical_url("ZMabc123"),
            "https://vm.tiktok.com/ZMabc123"
        );
        assert_eq!(
            Platform::Instagram.canonical_url("CxYz_12"),
            "https://www.instagram.com/p/CxYz_12/"
        );
    }
}
