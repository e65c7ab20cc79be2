//! 用于演示 `video-helper` 库的核心功能。
//!
//! ## 如何运行
//!
//! ```bash
//! cargo run --package video_helper_rs --example demo -- "https://youtu.be/dQw4w9WgXcQ"
//! ```

use std::io::{self, Write};

use video_helper_rs::error::Result;
use video_helper_rs::{
    DownloadArtifact, DownloadStrategy, Preview, QualityTier, VideoHelper, config, extractor,
};

use tracing::{Level, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let url = match std::env::args().nth(1) {
        Some(url) => url,
        None => prompt_line("请输入视频链接: ")?,
    };

    let Some((platform, _)) = extractor::detect_platform(&url) else {
        error!("无法识别链接 '{}' 所属的平台，程序退出。", url);
        return Ok(());
    };
    info!("识别到平台: {}", platform.display_name());

    let helper = VideoHelper::with_config(config::load_config()?)?;
    let preview = helper.preview(&url, platform).await?;
    print_preview(&preview);

    let quality = prompt_user_for_quality(&preview.metadata.available_qualities)?;
    match helper.download_with(
        &preview.identifier,
        platform,
        quality,
        DownloadStrategy::LocalBlob,
    )? {
        DownloadArtifact::Local(blob) => {
            let path = match blob.save_to_downloads().await {
                Ok(path) => path,
                Err(e) => {
                    error!("无法写入下载目录 ({})，改为保存到当前目录。", e);
                    blob.save_to(".").await?
                }
            };
            info!("合成文件已保存到: {:?}", path);
        }
        DownloadArtifact::Redirect { url } => {
            info!("请在浏览器中打开: {}", url);
        }
    }

    if let DownloadArtifact::Redirect { url } = helper.download_with(
        &preview.identifier,
        platform,
        quality,
        DownloadStrategy::Redirect,
    )? {
        println!("\n也可以通过外部站点下载: {url}");
    }

    Ok(())
}

fn print_preview(preview: &Preview) {
    let metadata = &preview.metadata;
    println!("\n  标题: {}", metadata.title);
    println!("  作者: {}", metadata.author.as_deref().unwrap_or("N/A"));
    println!("  时长: {} | 大小: {}", metadata.duration, metadata.file_size_label);
    println!("  封面: {}", metadata.thumbnail_url);
    println!("  ID:   {} ({:?})", preview.identifier, metadata.origin);
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// 列出可用清晰度，并提示用户进行选择。
fn prompt_user_for_quality(qualities: &[QualityTier]) -> Result<QualityTier> {
    println!("\n可用清晰度：");
    for (index, quality) in qualities.iter().enumerate() {
        println!("  [{}] {}", index + 1, quality);
    }

    loop {
        let input = prompt_line(&format!("\n请输入清晰度编号 (1-{}): ", qualities.len()))?;
        match input.parse::<usize>() {
            Ok(num) if num > 0 && num <= qualities.len() => break Ok(qualities[num - 1]),
            _ => eprintln!("\n输入无效，请输入一个列表中的有效编号。\n"),
        }
    }
}
