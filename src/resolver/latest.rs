//! “最后提交者胜出”的请求闸门。
//!
//! 每次提交新请求都会中止上一个仍在进行中的请求，保证过期的结果不会覆盖较新的界面状态。

use std::{future::Future, sync::Mutex};

use futures::{
    FutureExt,
    future::{AbortHandle, Abortable},
};

use crate::error::{Result, VideoHelperError};

/// 只允许最新一次提交的请求完成。
#[derive(Debug, Default)]
pub struct LatestOnly {
    current: Mutex<Option<AbortHandle>>,
}

impl LatestOnly {
    /// 创建一个空闸门。
    pub fn new() -> Self {
        Self::default()
    }

    /// 提交一个新请求，同时中止上一次提交的请求。
    ///
    /// 中止发生在调用时，而不是第一次 poll 时，所以提交顺序就是调用顺序。
    ///
    /// # 返回
    /// 被新请求取代时，返回的 future 以 `VideoHelperError::Aborted` 结束。
    pub fn submit<F: Future>(&self, fut: F) -> impl Future<Output = Result<F::Output>> + use<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let previous = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .replace(handle);
        if let Some(previous) = previous {
            tracing::debug!("[Resolver] 新请求已提交，中止上一个请求。");
            previous.abort();
        }
        Abortable::new(fut, registration).map(|r| r.map_err(VideoHelperError::from))
    }

    /// 中止当前进行中的请求（如果有）。
    pub fn cancel(&self) {
        let current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = current {
            handle.abort();
        }
    }
}
