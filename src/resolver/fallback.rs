//! 确定性占位数据生成器。
//!
//! 所有字段都由内容 ID 的字符码之和推导而来，相同的 (ID, 平台) 永远得到相同的记录。

use crate::{
    model::{
        metadata::{MetadataOrigin, MetadataRecord, format_duration, format_file_size},
        platform::Platform,
    },
    profile::{self, PlatformProfile},
};

/// 作者账号截取的 ID 前缀长度。
pub const AUTHOR_PREFIX_LEN: usize = 8;

/// 计算内容 ID 的种子：所有字符 Unicode 码点之和。
pub fn seed(identifier: &str) -> u64 {
    identifier
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(c)))
}

/// 在闭区间 `[min, max]` 内按种子取值。
fn pick_in_range(seed: u64, (min, max): (u64, u64)) -> u64 {
    min + seed % (max - min + 1)
}

/// 由种子估算的时长（秒）。
pub fn estimated_duration_secs(seed: u64, profile: &PlatformProfile) -> u64 {
    pick_in_range(seed, profile.duration_secs)
}

/// 由种子估算的文件大小，单位 0.1 MB。
pub fn estimated_size_tenths(seed: u64, profile: &PlatformProfile) -> u64 {
    let whole_mb = pick_in_range(seed, profile.size_mb);
    whole_mb * 10 + (seed / 7) % 10
}

/// 生成指定内容的占位元数据记录。这一步永远成功。
pub fn synthesize(identifier: &str, platform: Platform) -> MetadataRecord {
    let profile = profile::profile(platform);
    let seed = seed(identifier);

    let title_index = (seed % profile.title_candidates.len() as u64) as usize;
    let author: String = identifier.chars().take(AUTHOR_PREFIX_LEN).collect();

    MetadataRecord {
        title: profile.title_candidates[title_index].to_string(),
        thumbnail_url: profile.placeholder_thumbnail(identifier),
        duration: format_duration(estimated_duration_secs(seed, profile)),
        file_size_label: format_file_size(estimated_size_tenths(seed, profile)),
        author: Some(format!("@{author}")),
        available_qualities: profile.qualities.to_vec(),
        origin: MetadataOrigin::Fallback,
    }
}
