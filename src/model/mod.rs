//! 数据模型模块
//!
//! 定义了平台、清晰度档位以及元数据记录等与具体数据源无关的核心类型。

pub mod metadata;
pub mod platform;
pub mod quality;
