//! 负责处理库的运行配置及其可选的持久化。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    download::DownloadStrategy,
    error::Result,
    providers::oembed::{NOEMBED_ENDPOINT, YOUTUBE_OEMBED_ENDPOINT},
};

const CONFIG_FILE_NAME: &str = "config.json";
const USER_AGENT: &str = "video-helper-rs/0.1.0";

/// `VideoHelper` 的运行配置。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HelperConfig {
    /// 单个元数据请求的超时时间（秒）。
    pub request_timeout_secs: u64,
    /// 请求元数据时使用的 User-Agent。
    pub user_agent: String,
    /// YouTube 官方 oEmbed 端点。
    pub youtube_oembed_endpoint: String,
    /// noembed 端点，作为 YouTube 的第二个元数据源。
    pub noembed_endpoint: String,
    /// 默认的下载方式。
    pub download_strategy: DownloadStrategy,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 8,
            user_agent: USER_AGENT.to_string(),
            youtube_oembed_endpoint: YOUTUBE_OEMBED_ENDPOINT.to_string(),
            noembed_endpoint: NOEMBED_ENDPOINT.to_string(),
            download_strategy: DownloadStrategy::default(),
        }
    }
}

/// 获取应用配置目录 `<用户配置目录>/video-helper`，目录不存在时会创建。
pub(crate) fn get_config_dir() -> std::result::Result<PathBuf, std::io::Error> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("video-helper");
        fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "无法找到用户配置目录",
        ))
    }
}

/// 从用户配置目录加载配置。配置文件不存在时返回默认配置。
pub fn load_config() -> Result<HelperConfig> {
    load_config_from(&get_config_dir()?)
}

/// 从指定目录下的 `config.json` 加载配置。文件不存在时返回默认配置。
pub fn load_config_from(dir: &Path) -> Result<HelperConfig> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    match fs::read_to_string(&config_path) {
        Ok(content) => {
            let config: HelperConfig = serde_json::from_str(&content)?;
            info!("已从 {:?} 加载配置。", config_path);
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("配置文件 {:?} 不存在，将使用默认配置。", config_path);
            Ok(HelperConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// 将配置序列化为 JSON 并保存到用户配置目录。
pub fn save_config(config: &HelperConfig) -> Result<()> {
    save_config_to(&get_config_dir()?, config)
}

/// 将配置保存为指定目录下的 `config.json`，目录不存在时会创建。
pub fn save_config_to(dir: &Path, config: &HelperConfig) -> Result<()> {
    fs::create_dir_all(dir)?;
    let config_path = dir.join(CONFIG_FILE_NAME);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, content)?;
    info!("配置已保存到 {:?}。", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: HelperConfig =
            serde_json::from_str(r#"{"request_timeout_secs":3,"download_strategy":"local_blob"}"#)
                .unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.download_strategy, DownloadStrategy::LocalBlob);
        assert_eq!(config.youtube_oembed_endpoint, YOUTUBE_OEMBED_ENDPOINT);
        assert_eq!(config.user_agent, USER_AGENT);
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config, HelperConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("video-helper");
        let config = HelperConfig {
            request_timeout_secs: 2,
            download_strategy: DownloadStrategy::LocalBlob,
            ..Default::default()
        };

        save_config_to(&nested, &config).unwrap();
        assert!(nested.join(CONFIG_FILE_NAME).is_file());
        assert_eq!(load_config_from(&nested).unwrap(), config);
    }

    #[test]
    fn test_corrupt_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert!(matches!(
            load_config_from(dir.path()),
            Err(crate::error::VideoHelperError::JsonParse(_))
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = HelperConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: HelperConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
