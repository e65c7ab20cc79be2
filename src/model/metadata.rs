//! 定义了解析结果 `MetadataRecord` 及其格式化辅助函数。

use serde::{Deserialize, Serialize};

use crate::model::quality::QualityTier;

/// 元数据记录的来源。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataOrigin {
    /// 来自某个在线元数据源，字段为该源的名称。
    Primary(String),
    /// 由内容 ID 确定性生成的占位数据。
    Fallback,
}

/// 一条内容的完整描述，每次解析都会重新构造。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// 标题，永远不为空。
    pub title: String,
    /// 缩略图 URL。
    pub thumbnail_url: String,
    /// 时长，格式为 `m:ss`。
    pub duration: String,
    /// 估算的文件大小，例如 `"42.7 MB"`。
    pub file_size_label: String,
    /// 作者名称或账号。
    pub author: Option<String>,
    /// 可用的清晰度档位，按从高到低排列，且不为空。
    pub available_qualities: Vec<QualityTier>,
    /// 该记录的数据来源。
    pub origin: MetadataOrigin,
}

impl MetadataRecord {
    /// 该记录是否来自确定性占位数据。
    pub fn is_fallback(&self) -> bool {
        self.origin == MetadataOrigin::Fallback
    }
}

/// 将秒数格式化为 `m:ss`，分钟不补零，秒数补零到两位。
///
/// ```
/// use video_helper_rs::model::metadata::format_duration;
/// assert_eq!(format_duration(212), "3:32");
/// assert_eq!(format_duration(5), "0:05");
/// ```
pub fn format_duration(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// 将以 0.1 MB 为单位的大小格式化为 `"x.y MB"`。
pub fn format_file_size(tenths_of_mb: u64) -> String {
    format!("{}.{} MB", tenths_of_mb / 10, tenths_of_mb % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(899), "14:59");
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(427), "42.7 MB");
        assert_eq!(format_file_size(100), "10.0 MB");
        assert_eq!(format_file_size(5), "0.5 MB");
    }
}
