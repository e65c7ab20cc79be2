//! 下载模块
//!
//! 本库不做任何真实的媒体提取或转码。下载只有两种占位实现：
//! 在内存中生成一个合成文件交给调用方保存，或者跳转到能完成真实提取的外部站点。

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{Result, VideoHelperError},
    model::{platform::Platform, quality::QualityTier},
    profile,
};

/// 合成文件的大小（字节）。
pub const SYNTHETIC_BLOB_SIZE: usize = 1024;

/// 下载方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStrategy {
    /// 在内存中生成合成文件。
    LocalBlob,
    /// 跳转到外部下载站点。
    #[default]
    Redirect,
}

/// 在内存中生成的合成文件，通过一个临时句柄交给调用方。
#[derive(Debug, Clone)]
pub struct LocalBlob {
    /// 临时句柄，形如 `blob:video-helper/<uuid>`，每次下载都不同。
    pub handle: String,
    /// 建议的文件名。
    pub file_name: String,
    /// MIME 类型。
    pub mime_type: &'static str,
    /// 生成时间。
    pub created_at: DateTime<Utc>,
    /// 文件内容。
    pub bytes: Vec<u8>,
}

impl LocalBlob {
    /// 将合成文件以建议的文件名写入指定目录。
    ///
    /// # 返回
    /// 成功时返回写入的完整路径。
    pub async fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes).await?;
        info!("[Download] 已将 {} 写入 {:?}", self.handle, path);
        Ok(path)
    }

    /// 保存到用户的下载目录。
    pub async fn save_to_downloads(&self) -> Result<PathBuf> {
        let dir = dirs::download_dir()
            .ok_or_else(|| VideoHelperError::Internal("无法获取下载目录".to_string()))?;
        self.save_to(dir).await
    }
}

/// 一次下载请求的结果，对应两种下载方式。
#[derive(Debug, Clone)]
pub enum DownloadArtifact {
    /// 本地合成文件。
    Local(LocalBlob),
    /// 需要在浏览器中打开的外部站点链接。
    Redirect {
        /// 外部站点链接。
        url: String,
    },
}

/// 生成下载项。
///
/// # 参数
/// * `identifier` - 内容 ID。
/// * `platform` - 内容所属的平台。
/// * `quality` - 用户选择的清晰度，必须属于该平台的固定列表。
/// * `strategy` - 下载方式。
///
/// # 返回
/// 清晰度不属于该平台时返回 `VideoHelperError::UnsupportedQuality`。
pub fn download(
    identifier: &str,
    platform: Platform,
    quality: QualityTier,
    strategy: DownloadStrategy,
) -> Result<DownloadArtifact> {
    let profile = profile::profile(platform);
    if !profile.allows(quality) {
        return Err(VideoHelperError::UnsupportedQuality {
            platform: platform.display_name().to_string(),
            quality: quality.to_string(),
        });
    }

    match strategy {
        DownloadStrategy::LocalBlob => {
            let blob = synthesize_blob(identifier, platform, quality);
            info!(
                "[Download] 已生成合成文件 '{}' ({} 字节)",
                blob.file_name,
                blob.bytes.len()
            );
            Ok(DownloadArtifact::Local(blob))
        }
        DownloadStrategy::Redirect => {
            let url = profile.redirect_url(identifier);
            info!("[Download] 跳转到外部站点: {}", url);
            Ok(DownloadArtifact::Redirect { url })
        }
    }
}

/// 建议的文件名：`<平台>_<ID>_<清晰度>.<扩展名>`。
pub fn suggested_file_name(identifier: &str, platform: Platform, quality: QualityTier) -> String {
    let safe_id: String = identifier
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{platform}_{safe_id}_{quality}.{}", quality.file_extension())
}

fn synthesize_blob(identifier: &str, platform: Platform, quality: QualityTier) -> LocalBlob {
    let header = format!(
        "video-helper placeholder\nplatform={platform}\nid={identifier}\nquality={quality}\n"
    );
    let mut bytes = header.into_bytes();
    let filler = identifier.as_bytes();
    let mut i = 0;
    while bytes.len() < SYNTHETIC_BLOB_SIZE {
        bytes.push(filler.get(i % filler.len().max(1)).copied().unwrap_or(b'0'));
        i += 1;
    }
    bytes.truncate(SYNTHETIC_BLOB_SIZE);

    LocalBlob {
        handle: format!("blob:video-helper/{}", Uuid::new_v4()),
        file_name: suggested_file_name(identifier, platform, quality),
        mime_type: quality.mime_type(),
        created_at: Utc::now(),
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_branch() {
        let artifact = download(
            "7106594312292453675",
            Platform::TikTok,
            QualityTier::P720,
            DownloadStrategy::Redirect,
        )
        .unwrap();
        match artifact {
            DownloadArtifact::Redirect { url } => {
                assert!(url.starts_with("https://snaptik.app/"));
                assert!(url.contains("7106594312292453675"));
            }
            other => panic!("应为跳转链接，实际为 {other:?}"),
        }
    }

    #[test]
    fn test_local_blob_branch() {
        let artifact = download(
            "dQw4w9WgXcQ",
            Platform::YouTube,
            QualityTier::Audio,
            DownloadStrategy::LocalBlob,
        )
        .unwrap();
        let DownloadArtifact::Local(blob) = artifact else {
            panic!("应为本地合成文件");
        };
        assert_eq!(blob.file_name, "youtube_dQw4w9WgXcQ_audio.mp3");
        assert_eq!(blob.mime_type, "audio/mpeg");
        assert_eq!(blob.bytes.len(), SYNTHETIC_BLOB_SIZE);
        assert!(blob.handle.starts_with("blob:video-helper/"));
        assert!(blob.bytes.starts_with(b"video-helper placeholder\n"));
    }

    #[test]
    fn test_handles_are_unique() {
        let a = synthesize_blob("abc", Platform::Instagram, QualityTier::P720);
        let b = synthesize_blob("abc", Platform::Instagram, QualityTier::P720);
        assert_ne!(a.handle, b.handle);
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_rejects_quality_outside_platform_list() {
        let err = download(
            "CxYz12",
            Platform::Instagram,
            QualityTier::P240,
            DownloadStrategy::Redirect,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VideoHelperError::UnsupportedQuality { ref platform, ref quality }
                if platform == "Instagram" && quality == "240p"
        ));
        assert!(err.is_user_input_error());
        assert_eq!(err.to_string(), "Instagram 不提供 240p 清晰度");
    }

    #[test]
    fn test_suggested_file_name_sanitizes() {
        assert_eq!(
            suggested_file_name("a/b.c", Platform::TikTok, QualityTier::P480),
            "tiktok_a_b_c_480p.mp4"
        );
    }

    #[tokio::test]
    async fn test_save_to() {
        let dir = tempfile::tempdir().unwrap();
        let blob = synthesize_blob("CxYz12", Platform::Instagram, QualityTier::P1080);
        let path = blob.save_to(dir.path()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "instagram_CxYz12_1080p.mp4");
        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, blob.bytes);
    }

    #[tokio::test]
    async fn test_save_to_downloads_follows_user_download_dir() {
        let identifier = Uuid::new_v4().simple().to_string();
        let blob = synthesize_blob(&identifier, Platform::TikTok, QualityTier::Audio);

        match (dirs::download_dir(), blob.save_to_downloads().await) {
            (Some(dir), Ok(path)) => {
                assert_eq!(path, dir.join(&blob.file_name));
                assert_eq!(tokio::fs::read(&path).await.unwrap(), blob.bytes);
                tokio::fs::remove_file(&path).await.unwrap();
            }
            (None, Err(err)) => assert!(matches!(err, VideoHelperError::Internal(_))),
            (dir, result) => panic!("下载目录 {dir:?} 与保存结果 {result:?} 不一致"),
        }
    }
}
