//! 定义了下载时可选的清晰度档位。

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 可供用户选择的输出清晰度。
///
/// 五个视频分辨率档位加一个纯音频档位。每个平台实际可用的档位见 `profile` 模块。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum QualityTier {
    /// 1080p
    #[strum(serialize = "1080p")]
    #[serde(rename = "1080p")]
    P1080,
    /// 720p
    #[strum(serialize = "720p")]
    #[serde(rename = "720p")]
    P720,
    /// 480p
    #[strum(serialize = "480p")]
    #[serde(rename = "480p")]
    P480,
    /// 360p
    #[strum(serialize = "360p")]
    #[serde(rename = "360p")]
    P360,
    /// 240p
    #[strum(serialize = "240p")]
    #[serde(rename = "240p")]
    P240,
    /// 仅音频
    #[strum(serialize = "audio")]
    #[serde(rename = "audio")]
    Audio,
}

impl QualityTier {
    /// 是否为纯音频档位。
    pub fn is_audio_only(self) -> bool {
        matches!(self, Self::Audio)
    }

    /// 该档位下载产物的文件扩展名。
    #[must_use]
    pub fn file_extension(self) -> &'static str {
        if self.is_audio_only() { "mp3" } else { "mp4" }
    }

    /// 该档位下载产物的 MIME 类型。
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        if self.is_audio_only() {
            "audio/mpeg"
        } else {
            "video/mp4"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_labels() {
        assert_eq!(QualityTier::P1080.to_string(), "1080p");
        assert_eq!(QualityTier::Audio.to_string(), "audio");
        assert_eq!(QualityTier::from_str("720P").unwrap(), QualityTier::P720);
        assert_eq!(QualityTier::from_str("Audio").unwrap(), QualityTier::Audio);
        assert!(QualityTier::from_str("4k").is_err());
    }

    #[test]
    fn test_extension_and_mime_type() {
        assert_eq!(QualityTier::Audio.file_extension(), "mp3");
        assert_eq!(QualityTier::P360.file_extension(), "mp4");
        assert_eq!(QualityTier::Audio.mime_type(), "audio/mpeg");
        assert_eq!(QualityTier::P480.mime_type(), "video/mp4");
    }
}
