//! 通知能力
//!
//! 提取器和解析器本身不产生任何通知，通知由顶层的 `VideoHelper` 通过注入的 `Notifier` 发出。

use std::sync::Mutex;

/// 向用户展示操作结果的能力，例如界面上的 toast。
pub trait Notifier: Send + Sync {
    /// 普通提示。
    fn info(&self, message: &str);
    /// 操作成功。
    fn success(&self, message: &str);
    /// 用户可修正的错误。
    fn error(&self, message: &str);
}

/// 默认实现，把通知写入 `tracing` 日志。
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        tracing::info!("[Notify] {message}");
    }

    fn success(&self, message: &str) {
        tracing::info!("[Notify] ✅ {message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!("[Notify] ❌ {message}");
    }
}

/// 通知级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// 普通提示
    Info,
    /// 成功
    Success,
    /// 错误
    Error,
}

/// 把所有通知记录在内存中，便于调用方在测试里断言。
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    /// 创建一个空的记录器。
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回目前记录到的所有通知。
    pub fn entries(&self) -> Vec<(NotificationLevel, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, level: NotificationLevel, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.push(NotificationLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.push(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationLevel::Error, message);
    }
}
