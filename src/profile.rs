//! 平台配置表
//!
//! 以静态表的形式集中描述每个平台的链接格式、占位数据常量、清晰度列表与外部下载站点，
//! 提取器、解析器和下载模块都只通过这张表来区分平台。

use crate::{
    model::{platform::Platform, quality::QualityTier},
    providers::oembed::OEmbedEndpoint,
};

/// 单个平台的只读配置。
#[derive(Debug)]
pub struct PlatformProfile {
    /// 对应的平台。
    pub platform: Platform,
    /// 该平台历史上出现过的所有链接格式。每个正则的第一个捕获组就是内容 ID。
    ///
    /// 链接可以出现在文本中间，但必须从文本开头、空白或引号括号之后开始；
    /// 内容 ID 之后必须是路径分隔符、查询串、空白或文本结尾，否则整体不匹配。
    pub url_patterns: &'static [&'static str],
    /// 按优先级排列的公开元数据接口，为空表示该平台只能使用占位数据。
    pub primary_sources: &'static [OEmbedEndpoint],
    /// 生成占位标题时的候选列表。
    pub title_candidates: &'static [&'static str],
    /// 占位时长范围（秒），闭区间。
    pub duration_secs: (u64, u64),
    /// 占位文件大小范围（MB），闭区间。
    pub size_mb: (u64, u64),
    /// 该平台固定提供的清晰度档位，从高到低。
    pub qualities: &'static [QualityTier],
    /// 外部下载站点的链接模板，`{url}` 会被替换为转义后的内容链接。
    pub redirect_template: &'static str,
}

const YOUTUBE: PlatformProfile = PlatformProfile {
    platform: Platform::YouTube,
    url_patterns: &[
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:(?:www\.|m\.|music\.)?youtube\.com)/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)"#,
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:youtu\.be)/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)"#,
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:(?:www\.|m\.)?youtube\.com)/(?:embed|shorts|live|v)/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)"#,
    ],
    primary_sources: &[OEmbedEndpoint::YouTube, OEmbedEndpoint::Noembed],
    title_candidates: &[
        "Amazing Nature Documentary",
        "Top 10 Programming Tips",
        "Epic Travel Vlog: Hidden Beaches",
        "Relaxing Piano Music for Study",
        "How to Cook the Perfect Pasta",
        "Live Concert Highlights",
    ],
    duration_secs: (120, 899),
    size_mb: (20, 219),
    qualities: &[
        QualityTier::P1080,
        QualityTier::P720,
        QualityTier::P480,
        QualityTier::P360,
        QualityTier::P240,
        QualityTier::Audio,
    ],
    redirect_template: "https://en.savefrom.net/#url={url}",
};

const TIKTOK: PlatformProfile = PlatformProfile {
    platform: Platform::TikTok,
    url_patterns: &[
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:(?:www\.|m\.)?tiktok\.com)/(?:@[\w.-]+/)?video/(\d+)(?:[/?#\s"')>]|$)"#,
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:(?:vm|vt)\.tiktok\.com)/([A-Za-z0-9]+)(?:[/?#\s"')>]|$)"#,
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:(?:www\.)?tiktok\.com)/t/([A-Za-z0-9]+)(?:[/?#\s"')>]|$)"#,
    ],
    primary_sources: &[],
    title_candidates: &[
        "Funny Dance Challenge",
        "Quick Recipe Hack",
        "Cute Pet Compilation",
        "Outfit Transition Trend",
        "Satisfying Art Timelapse",
    ],
    duration_secs: (15, 179),
    size_mb: (3, 42),
    qualities: &[QualityTier::P720, QualityTier::P480, QualityTier::P360],
    redirect_template: "https://snaptik.app/?url={url}",
};

const INSTAGRAM: PlatformProfile = PlatformProfile {
    platform: Platform::Instagram,
    url_patterns: &[
        r#"(?:^|[\s"'(<])(?i:https?://)?(?i:(?:www\.)?(?:instagram\.com|instagr\.am))/(?:[\w.]+/)?(?:p|reels?|tv)/([A-Za-z0-9_-]+)(?:[/?#\s"')>]|$)"#,
    ],
    primary_sources: &[],
    title_candidates: &[
        "Sunset at the Beach",
        "Morning Workout Routine",
        "Street Food Adventure",
        "Behind the Scenes",
        "Weekend Road Trip",
    ],
    duration_secs: (15, 89),
    size_mb: (2, 31),
    qualities: &[QualityTier::P1080, QualityTier::P720, QualityTier::P480],
    redirect_template: "https://snapinsta.app/?url={url}",
};

/// 平台配置表，顺序即 `detect_platform` 的尝试顺序。
pub static PROFILES: [&PlatformProfile; 3] = [&YOUTUBE, &TIKTOK, &INSTAGRAM];

/// 获取指定平台的配置。
pub fn profile(platform: Platform) -> &'static PlatformProfile {
    match platform {
        Platform::YouTube => &YOUTUBE,
        Platform::TikTok => &TIKTOK,
        Platform::Instagram => &INSTAGRAM,
    }
}

impl PlatformProfile {
    /// 是否存在可用的公开元数据接口。
    pub fn has_primary_endpoint(&self) -> bool {
        !self.primary_sources.is_empty()
    }

    /// 生成嵌入了内容 ID 的稳定缩略图链接。
    pub fn placeholder_thumbnail(&self, identifier: &str) -> String {
        match self.platform {
            Platform::YouTube => format!("https://img.youtube.com/vi/{identifier}/hqdefault.jpg"),
            other => format!("https://picsum.photos/seed/{other}-{identifier}/640/360"),
        }
    }

    /// 生成指向外部下载站点的跳转链接。
    pub fn redirect_url(&self, identifier: &str) -> String {
        let content_url = self.platform.canonical_url(identifier);
        self.redirect_template
            .replace("{url}", &urlencoding::encode(&content_url))
    }

    /// 清晰度是否属于该平台的固定列表。
    pub fn allows(&self, quality: QualityTier) -> bool {
        self.qualities.contains(&quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_is_consistent() {
        for platform in Platform::iter() {
            let p = profile(platform);
            assert_eq!(p.platform, platform);
            assert!(!p.url_patterns.is_empty());
            assert!(!p.title_candidates.is_empty());
            assert!(!p.qualities.is_empty());
            assert!(p.duration_secs.0 <= p.duration_secs.1);
            assert!(p.size_mb.0 <= p.size_mb.1);
        }
        assert_eq!(profile(Platform::YouTube).qualities.len(), 6);
        assert_eq!(profile(Platform::TikTok).qualities.len(), 3);
        assert_eq!(profile(Platform::Instagram).qualities.len(), 3);
    }

    #[test]
    fn test_only_youtube_has_primary_endpoint() {
        let with_endpoint: Vec<_> = PROFILES
            .iter()
            .filter(|p| p.has_primary_endpoint())
            .map(|p| p.platform)
            .collect();
        assert_eq!(with_endpoint, vec![Platform::YouTube]);
        assert_eq!(
            profile(Platform::YouTube).primary_sources,
            &[OEmbedEndpoint::YouTube, OEmbedEndpoint::Noembed]
        );
    }

    #[test]
    fn test_redirect_url_embeds_encoded_content_url() {
        let url = profile(Platform::YouTube).redirect_url("dQw4w9WgXcQ");
        assert_eq!(
            url,
            "https://en.savefrom.net/#url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_placeholder_thumbnail() {
        assert_eq!(
            profile(Platform::Instagram).placeholder_thumbnail("Cabc"),
            "https://picsum.photos/seed/instagram-Cabc/640/360"
        );
    }
}
