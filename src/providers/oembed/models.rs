//! 此模块定义了用于反序列化 oEmbed 接口响应的数据结构。
//! 格式参考 <https://oembed.com/>

use serde::Deserialize;

/// oEmbed 接口的响应结构。
///
/// 所有字段都是可选的：noembed 在找不到内容时仍返回 200，只带一个 `error` 字段。
#[derive(Debug, Default, Deserialize)]
pub struct OEmbedResponse {
    /// 内容标题。
    pub title: Option<String>,
    /// 作者名称。
    pub author_name: Option<String>,
    /// 作者主页链接。
    pub author_url: Option<String>,
    /// 提供方名称，例如 "YouTube"。
    pub provider_name: Option<String>,
    /// 缩略图链接。
    pub thumbnail_url: Option<String>,
    /// 缩略图宽度。
    pub thumbnail_width: Option<u32>,
    /// 缩略图高度。
    pub thumbnail_height: Option<u32>,
    /// noembed 专有的错误信息。
    pub error: Option<String>,
}
