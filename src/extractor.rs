//! 内容 ID 提取器
//!
//! 将用户粘贴的链接按所选平台的已知链接格式进行匹配，取出平台内唯一的内容 ID。
//! 提取器是纯函数，不发起任何网络请求。

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    error::{Result, VideoHelperError},
    model::platform::Platform,
    profile::{self, PROFILES},
};

static URL_PATTERNS: LazyLock<HashMap<Platform, Vec<Regex>>> = LazyLock::new(|| {
    Platform::iter()
        .map(|platform| {
            let regexes = profile::profile(platform)
                .url_patterns
                .iter()
                .map(|pattern| Regex::new(pattern).expect("编译平台链接正则失败"))
                .collect();
            (platform, regexes)
        })
        .collect()
});

/// 从链接中提取指定平台的内容 ID。
///
/// 依次尝试该平台的每一种链接格式，返回第一个匹配的捕获组，原样返回，不做任何规范化或解码。
/// 协议和域名部分大小写不敏感，ID 本身大小写敏感。
///
/// 匹配是搜索式的：链接前面可以带有说明文字（例如 `"看这个: https://youtu.be/..."`），
/// 但链接本身必须从文本开头、空白或引号括号之后开始，`ftp://youtu.be/...` 或
/// `notyoutube.com/...` 这类只在中间包含已知域名的文本不会匹配。
/// 内容 ID 之后的字符必须是路径分隔符、查询串、空白或文本结尾，
/// 多余的字符会让整个链接无效，而不是被截断成一个较短的 ID。
///
/// # 参数
/// * `url` - 用户输入的原始字符串。
/// * `platform` - 用户选择的平台。
///
/// # 返回
/// 成功时返回内容 ID；如果没有任何格式匹配，返回 `VideoHelperError::InvalidFormat`。
pub fn extract(url: &str, platform: Platform) -> Result<String> {
    let candidate = url.trim();
    let patterns = URL_PATTERNS
        .get(&platform)
        .ok_or_else(|| VideoHelperError::UnsupportedPlatform(platform.to_string()))?;

    let identifier = patterns
        .iter()
        .find_map(|re| re.captures(candidate))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    match identifier {
        Some(id) => {
            debug!("[Extractor] 从 {} 链接中提取到 ID: {}", platform, id);
            Ok(id)
        }
        None => {
            debug!("[Extractor] 链接无法匹配 {} 的任何格式: '{}'", platform, url);
            Err(VideoHelperError::InvalidFormat {
                url: url.to_string(),
                platform: platform.display_name().to_string(),
            })
        }
    }
}

/// 在所有平台中寻找能识别该链接的平台。
///
/// 按平台表的顺序尝试，返回第一个匹配的平台及其内容 ID。
pub fn detect_platform(url: &str) -> Option<(Platform, String)> {
    PROFILES
        .iter()
        .find_map(|p| extract(url, p.platform).ok().map(|id| (p.platform, id)))
}
